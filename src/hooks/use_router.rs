// ============================================================================
// USE ROUTER - Rutas "/" y "/create-point" sobre la History API
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

use crate::models::Route;

/// Ruta actual + callback de navegación. Se comparte por contexto desde `App`.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub route: Route,
    navigate: Callback<Route>,
}

impl Navigator {
    pub fn push(&self, route: Route) {
        self.navigate.emit(route);
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

fn push_history(route: Route) {
    let result = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|w| w.history())
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(route.path())));

    if let Err(e) = result {
        log::error!("❌ [ROUTER] No se pudo actualizar el historial: {:?}", e);
    }
}

/// Solo para `App`: mantiene la ruta sincronizada con la URL
#[hook]
pub fn use_router() -> Navigator {
    let route = use_state(current_route);

    // Botones atrás/adelante del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                route.set(current_route());
            });
            let window = web_sys::window();
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        });
    }

    // Identidad estable: el contexto solo cambia cuando cambia la ruta
    let navigate = {
        let setter = route.setter();
        use_callback(setter, |next: Route, setter| {
            log::info!("🧭 [ROUTER] Navegando a {}", next.path());
            push_history(next);
            setter.set(next);
        })
    };

    Navigator {
        route: *route,
        navigate,
    }
}

#[hook]
pub fn use_navigator() -> Option<Navigator> {
    use_context::<Navigator>()
}
