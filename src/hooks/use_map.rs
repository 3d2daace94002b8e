// ============================================================================
// USE LEAFLET MAP - Ciclo de vida del mapa Leaflet
// ============================================================================
// Inicializa el mapa al montar, lo recentra cuando llega la geolocalización y
// mueve el marcador. Los clicks vuelven a Rust por `on_click`.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::GeoPosition;
use crate::utils::constants::TILE_ATTRIBUTION;
use crate::utils::leaflet_ffi::*;

/// Devuelve `true` cuando el mapa ya está creado
#[hook]
pub fn use_leaflet_map(
    container_id: &'static str,
    center: GeoPosition,
    marker: GeoPosition,
    on_click: Callback<GeoPosition>,
) -> bool {
    let ready = use_state(|| false);

    // Siempre el callback del último render
    let on_click_ref = use_mut_ref(|| on_click.clone());
    *on_click_ref.borrow_mut() = on_click;

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            let click = Rc::new(Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lng: f64| {
                on_click_ref.borrow().emit(GeoPosition::new(lat, lng));
            }));

            // Esperar a que el contenedor tenga tamaño en el DOM
            let init_click = click.clone();
            let timeout = Timeout::new(100, move || {
                log::info!("🗺️ [MAP] Inicializando Leaflet en ({}, {})", center.latitude, center.longitude);
                init_leaflet_map(
                    container_id,
                    center.latitude,
                    center.longitude,
                    CONFIG.map_config.zoom,
                    &CONFIG.map_config.tile_url,
                    TILE_ATTRIBUTION,
                    &init_click,
                );
                ready.set(true);
            });

            move || {
                drop(timeout);
                destroy_leaflet_map();
                drop(click);
            }
        });
    }

    {
        use_effect_with((center, *ready), move |(center, ready)| {
            if *ready {
                set_leaflet_center(center.latitude, center.longitude);
            }
            || ()
        });
    }

    {
        use_effect_with((marker, *ready), move |(marker, ready)| {
            if *ready {
                set_leaflet_marker(marker.latitude, marker.longitude);
            }
            || ()
        });
    }

    *ready
}
