use yew::prelude::*;

use super::{CreatePoint, Home};
use crate::hooks::{use_router, Navigator};
use crate::models::Route;

#[function_component(App)]
pub fn app() -> Html {
    let navigator = use_router();

    let page = match navigator.route {
        Route::Home => html! { <Home /> },
        Route::CreatePoint => html! { <CreatePoint /> },
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            { page }
        </ContextProvider<Navigator>>
    }
}
