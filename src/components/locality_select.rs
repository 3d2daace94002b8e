use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::utils::constants::NONE_SELECTED;

#[derive(Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Properties, PartialEq)]
pub struct LocalitySelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<SelectOption>,
    pub selected: String,
    pub on_change: Callback<String>,
}

/// Select con opción "Selecione" (valor "0") delante de las opciones
#[function_component(LocalitySelect)]
pub fn locality_select(props: &LocalitySelectProps) -> Html {
    let onchange = props.on_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>().value()
    });

    html! {
        <div class="field">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <select name={props.id.clone()} id={props.id.clone()} {onchange}>
                <option value={NONE_SELECTED} selected={props.selected == NONE_SELECTED}>{"Selecione"}</option>
                { for props.options.iter().map(|option| html! {
                    <option
                        key={option.value.clone()}
                        value={option.value.clone()}
                        selected={props.selected == option.value}
                    >
                        { option.label.clone() }
                    </option>
                }) }
            </select>
        </div>
    }
}
