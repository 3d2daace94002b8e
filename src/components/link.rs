use yew::prelude::*;

use crate::hooks::use_navigator;
use crate::models::Route;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// `<a>` que navega sin recargar la página
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let navigator = use_navigator();
    let to = props.to;

    let onclick = Callback::from(move |e: MouseEvent| {
        if let Some(navigator) = &navigator {
            e.prevent_default();
            navigator.push(to);
        }
    });

    html! {
        <a href={to.path()} class={props.class.clone()} {onclick}>
            { props.children.clone() }
        </a>
    }
}
