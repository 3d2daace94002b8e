use yew::prelude::*;

use super::Link;
use crate::models::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div id="page-home">
            <div class="content">
                <header>
                    <span class="logo">{"♻️ E-coleta"}</span>
                </header>
                <main>
                    <h1>{"E-coleta"}</h1>
                    <p>{"Ajudamos você a encontrar um ponto de coleta de materiais descartáveis."}</p>
                    <Link to={Route::CreatePoint}>
                        <span>{"➜"}</span>
                        <strong>{"Cadastre um ponto de coleta"}</strong>
                    </Link>
                </main>
            </div>
        </div>
    }
}
