use yew::prelude::*;

use crate::models::{CatalogItem, SelectedItems};

#[derive(Properties, PartialEq)]
pub struct ItemGridProps {
    pub items: Vec<CatalogItem>,
    pub selected: SelectedItems,
    pub on_toggle: Callback<u32>,
}

#[function_component(ItemGrid)]
pub fn item_grid(props: &ItemGridProps) -> Html {
    html! {
        <ul class="items-grid">
            { for props.items.iter().map(|item| {
                let id = item.id;
                let onclick = props.on_toggle.reform(move |_: MouseEvent| id);
                let class = if props.selected.contains(id) { "selected" } else { "" };

                html! {
                    <li key={id} {class} {onclick}>
                        <img src={item.image_path.clone()} alt={item.title.clone()} />
                        <span>{ item.title.clone() }</span>
                    </li>
                }
            }) }
        </ul>
    }
}
