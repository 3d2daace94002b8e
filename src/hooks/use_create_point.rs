// ============================================================================
// USE CREATE POINT HOOK - Controlador de la página de registro
// ============================================================================
// Hook nativo de Yew - Delega las transiciones al ViewModel vía use_reducer.
// Los resultados asíncronos vuelven como acciones, así siempre se aplican
// sobre el estado más reciente.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::GeoPosition;
use crate::services::{current_position, ApiClient, IbgeClient};
use crate::viewmodels::{CityRequest, CreatePointAction, CreatePointState, LoadSource};

impl Reducible for CreatePointState {
    type Action = CreatePointAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle del hook
#[derive(Clone)]
pub struct UseCreatePointHandle {
    pub state: UseReducerHandle<CreatePointState>,
    pub select_uf: Callback<String>,
    pub select_city: Callback<String>,
    pub map_click: Callback<GeoPosition>,
    /// (name del input, valor)
    pub input_change: Callback<(String, String)>,
    pub toggle_item: Callback<u32>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_create_point() -> UseCreatePointHandle {
    let state = use_reducer(CreatePointState::default);

    // Al montar: geolocalización, catálogo de items y UFs (en paralelo)
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let geo = dispatcher.clone();
            spawn_local(async move {
                match current_position().await {
                    Ok(position) => {
                        log::info!("📍 [GEO] Posición inicial: ({}, {})", position.latitude, position.longitude);
                        geo.dispatch(CreatePointAction::PositionDetected(position));
                    }
                    Err(e) => log::warn!("⚠️ [GEO] Sin posición inicial: {}", e),
                }
            });

            let items = dispatcher.clone();
            spawn_local(async move {
                match ApiClient::new().fetch_items().await {
                    Ok(loaded) => items.dispatch(CreatePointAction::ItemsLoaded(loaded)),
                    Err(e) => {
                        log::error!("❌ [CREATE_POINT] Error cargando items: {}", e);
                        items.dispatch(CreatePointAction::LoadFailed { source: LoadSource::Items, error: e });
                    }
                }
            });

            spawn_local(async move {
                match IbgeClient::new().fetch_regions().await {
                    Ok(regions) => dispatcher.dispatch(CreatePointAction::RegionsLoaded(regions)),
                    Err(e) => {
                        log::error!("❌ [CREATE_POINT] Error cargando UFs: {}", e);
                        dispatcher.dispatch(CreatePointAction::LoadFailed { source: LoadSource::Regions, error: e });
                    }
                }
            });
            || ()
        });
    }

    // Municipios: una petición por cada token nuevo
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.city_request().cloned(), move |request| {
            if let Some(CityRequest { uf, token }) = request.clone() {
                spawn_local(async move {
                    match IbgeClient::new().fetch_cities(&uf).await {
                        Ok(cities) => dispatcher.dispatch(CreatePointAction::CitiesLoaded { token, cities }),
                        Err(e) => {
                            log::error!("❌ [CREATE_POINT] Error cargando municipios de {}: {}", uf, e);
                            dispatcher.dispatch(CreatePointAction::CityLoadFailed { token, error: e });
                        }
                    }
                });
            }
            || ()
        });
    }

    let select_uf = {
        let dispatcher = state.dispatcher();
        Callback::from(move |uf: String| dispatcher.dispatch(CreatePointAction::SelectUf(uf)))
    };

    let select_city = {
        let dispatcher = state.dispatcher();
        Callback::from(move |city: String| dispatcher.dispatch(CreatePointAction::SelectCity(city)))
    };

    let map_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |position: GeoPosition| {
            dispatcher.dispatch(CreatePointAction::MapClicked(position))
        })
    };

    let input_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(name, value): (String, String)| {
            dispatcher.dispatch(CreatePointAction::FieldChanged { name, value })
        })
    };

    let toggle_item = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(CreatePointAction::ToggleItem(id)))
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |_| {
            if !state.can_submit() {
                log::warn!("⚠️ [CREATE_POINT] Envío ignorado (en curso o ya registrado)");
                return;
            }

            let payload = state.payload();
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(CreatePointAction::SubmitStarted);

            spawn_local(async move {
                match ApiClient::new().create_point(&payload).await {
                    Ok(()) => dispatcher.dispatch(CreatePointAction::SubmitSucceeded),
                    Err(e) => {
                        log::error!("❌ [CREATE_POINT] Error registrando punto: {}", e);
                        dispatcher.dispatch(CreatePointAction::SubmitFailed(e));
                    }
                }
            });
        })
    };

    UseCreatePointHandle {
        state,
        select_uf,
        select_city,
        map_click,
        input_change,
        toggle_item,
        submit,
    }
}
