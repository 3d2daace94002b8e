use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{ConfirmationModal, ItemGrid, Link, LocalitySelect, MapPicker, SelectOption};
use crate::config::CONFIG;
use crate::hooks::{use_create_point, use_navigator};
use crate::models::{FormField, Route};

#[function_component(CreatePoint)]
pub fn create_point() -> Html {
    let handle = use_create_point();
    let navigator = use_navigator();
    let state = &*handle.state;

    let onsubmit = {
        let submit = handle.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let oninput = handle.input_change.reform(|e: InputEvent| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        (input.name(), input.value())
    });

    let on_close_modal = {
        let target = state.after_confirmation();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(target);
            }
        })
    };

    let uf_options: Vec<SelectOption> = state
        .regions
        .iter()
        .map(|region| SelectOption {
            value: region.code.clone(),
            label: region.name.clone(),
        })
        .collect();

    let city_options: Vec<SelectOption> = state
        .cities
        .iter()
        .map(|city| SelectOption {
            value: city.name.clone(),
            label: city.name.clone(),
        })
        .collect();

    let text_field = |field: FormField, label: &'static str, input_type: &'static str| {
        html! {
            <div class="field-group">
                <div class="field">
                    <label for={field.input_name()}>{ label }</label>
                    <input
                        type={input_type}
                        name={field.input_name()}
                        id={field.input_name()}
                        oninput={oninput.clone()}
                    />
                </div>
            </div>
        }
    };

    let error_banner = match state.visible_error(CONFIG.surface_load_errors) {
        Some(error) => html! {
            <div class="error-banner" role="alert">
                { format!("Não foi possível concluir a operação: {}", error) }
            </div>
        },
        None => html! {},
    };

    html! {
        <div id="page-create-point">
            if state.registered {
                <ConfirmationModal on_close={on_close_modal} />
            }
            <header>
                <span class="logo">{"♻️ E-coleta"}</span>
                <Link to={Route::Home}>
                    {"← Voltar para a Home"}
                </Link>
            </header>

            <form {onsubmit}>
                <h1>{"Cadastro de ponto de coleta"}</h1>

                <fieldset>
                    <legend>
                        <h2>{"Dados"}</h2>
                    </legend>
                    { text_field(FormField::Name, "Nome", "text") }
                    { text_field(FormField::Email, "E-mail", "email") }
                    { text_field(FormField::Whatsapp, "Whatsapp", "text") }
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Endereço"}</h2>
                        <span>{"Selecione o endereço no mapa"}</span>
                    </legend>

                    <MapPicker
                        center={state.initial_position}
                        marker={state.marker_position}
                        on_click={handle.map_click.clone()}
                    />

                    <div class="field-group">
                        <LocalitySelect
                            id="uf"
                            label="UF"
                            options={uf_options}
                            selected={state.selected_uf.clone()}
                            on_change={handle.select_uf.clone()}
                        />
                        <LocalitySelect
                            id="city"
                            label="Cidade"
                            options={city_options}
                            selected={state.selected_city.clone()}
                            on_change={handle.select_city.clone()}
                        />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>{"Itens de coleta"}</h2>
                        <span>{"Selecione os itens"}</span>
                    </legend>

                    <ItemGrid
                        items={state.items.clone()}
                        selected={state.selected_items.clone()}
                        on_toggle={handle.toggle_item.clone()}
                    />
                </fieldset>

                { error_banner }

                <button type="submit" disabled={!state.can_submit()}>
                    { if state.submitting { "Gravando..." } else { "Gravar" } }
                </button>
            </form>
        </div>
    }
}
