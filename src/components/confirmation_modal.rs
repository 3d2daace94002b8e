use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div id="confirmationModal" class="modal">
            <div class="modal-content">
                <span class="close" onclick={close}>{"×"}</span>
                <p>{"✔ Ponto de coleta registrado com sucesso!"}</p>
            </div>
        </div>
    }
}
