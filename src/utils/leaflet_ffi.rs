// ============================================================================
// LEAFLET FFI - Bindings a static/map_bridge.js
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea el mapa Leaflet en `container_id`; `on_click` recibe (lat, lng)
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(
        container_id: &str,
        latitude: f64,
        longitude: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
        on_click: &Closure<dyn FnMut(f64, f64)>,
    );

    #[wasm_bindgen(js_name = setLeafletCenter)]
    pub fn set_leaflet_center(latitude: f64, longitude: f64);

    #[wasm_bindgen(js_name = setLeafletMarker)]
    pub fn set_leaflet_marker(latitude: f64, longitude: f64);

    #[wasm_bindgen(js_name = destroyLeafletMap)]
    pub fn destroy_leaflet_map();
}
