// ============================================================================
// CREATE POINT VIEWMODEL - Estado y transiciones del formulario de registro
// ============================================================================
// Lógica pura: recibe acciones y devuelve estado. Las llamadas HTTP y al
// navegador las hace el hook (use_create_point) y vuelven como acciones.
// ============================================================================

use crate::models::{
    CatalogItem, City, FormField, FormFields, GeoPosition, Region, Route, SelectedItems,
    SubmissionPayload,
};
use crate::services::ServiceError;
use crate::utils::constants::NONE_SELECTED;

/// Petición de municipios pendiente. `token` crece con cada UF elegida.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRequest {
    pub uf: String,
    pub token: u64,
}

/// Origen de un error de carga
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Items,
    Regions,
    Cities,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreatePointAction {
    PositionDetected(GeoPosition),
    ItemsLoaded(Vec<CatalogItem>),
    RegionsLoaded(Vec<Region>),
    CitiesLoaded { token: u64, cities: Vec<City> },
    /// Fallo al cargar items o UFs
    LoadFailed { source: LoadSource, error: ServiceError },
    /// Fallo de una petición de municipios; se ignora si el token ya no es el actual
    CityLoadFailed { token: u64, error: ServiceError },
    SelectUf(String),
    SelectCity(String),
    MapClicked(GeoPosition),
    FieldChanged { name: String, value: String },
    ToggleItem(u32),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(ServiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePointState {
    pub items: Vec<CatalogItem>,
    pub regions: Vec<Region>,
    pub cities: Vec<City>,
    pub selected_uf: String,
    pub selected_city: String,
    /// Centro inicial del mapa (geolocalización del dispositivo)
    pub initial_position: GeoPosition,
    /// Posición marcada por el usuario
    pub marker_position: GeoPosition,
    pub fields: FormFields,
    pub selected_items: SelectedItems,
    pub submitting: bool,
    pub registered: bool,
    pub submit_error: Option<ServiceError>,
    load_error: Option<(LoadSource, ServiceError)>,
    city_request: Option<CityRequest>,
    next_token: u64,
}

impl Default for CreatePointState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            regions: Vec::new(),
            cities: Vec::new(),
            selected_uf: NONE_SELECTED.to_string(),
            selected_city: NONE_SELECTED.to_string(),
            initial_position: GeoPosition::default(),
            marker_position: GeoPosition::default(),
            fields: FormFields::default(),
            selected_items: SelectedItems::default(),
            submitting: false,
            registered: false,
            submit_error: None,
            load_error: None,
            city_request: None,
            next_token: 0,
        }
    }
}

impl CreatePointState {
    /// Última petición de municipios emitida (la única cuyo resultado se acepta)
    pub fn city_request(&self) -> Option<&CityRequest> {
        self.city_request.as_ref()
    }

    pub fn apply(&mut self, action: CreatePointAction) {
        match action {
            CreatePointAction::PositionDetected(position) => {
                self.initial_position = position;
            }
            CreatePointAction::ItemsLoaded(items) => {
                self.items = items;
                self.clear_load_error(LoadSource::Items);
            }
            CreatePointAction::RegionsLoaded(regions) => {
                self.regions = regions;
                self.clear_load_error(LoadSource::Regions);
            }
            CreatePointAction::CitiesLoaded { token, cities } => {
                if self.is_current_city_token(token) {
                    self.cities = cities;
                    self.clear_load_error(LoadSource::Cities);
                } else {
                    log::warn!("⏭️ [CREATE_POINT] Respuesta de municipios descartada (token {})", token);
                }
            }
            CreatePointAction::LoadFailed { source, error } => {
                self.load_error = Some((source, error));
            }
            CreatePointAction::CityLoadFailed { token, error } => {
                if self.is_current_city_token(token) {
                    self.load_error = Some((LoadSource::Cities, error));
                } else {
                    log::warn!("⏭️ [CREATE_POINT] Error de municipios descartado (token {}): {}", token, error);
                }
            }
            CreatePointAction::SelectUf(uf) => self.select_uf(uf),
            CreatePointAction::SelectCity(city) => {
                self.selected_city = city;
            }
            CreatePointAction::MapClicked(position) => {
                self.marker_position = position;
            }
            CreatePointAction::FieldChanged { name, value } => match name.parse::<FormField>() {
                Ok(field) => self.fields = self.fields.with_field(field, value),
                Err(e) => log::warn!("⚠️ [CREATE_POINT] {}", e),
            },
            CreatePointAction::ToggleItem(id) => self.selected_items.toggle(id),
            CreatePointAction::SubmitStarted => {
                self.submitting = true;
                self.submit_error = None;
            }
            CreatePointAction::SubmitSucceeded => {
                self.submitting = false;
                self.registered = true;
            }
            CreatePointAction::SubmitFailed(error) => {
                self.submitting = false;
                self.submit_error = Some(error);
            }
        }
    }

    fn is_current_city_token(&self, token: u64) -> bool {
        self.city_request.as_ref().is_some_and(|request| request.token == token)
    }

    fn clear_load_error(&mut self, source: LoadSource) {
        if matches!(&self.load_error, Some((failed, _)) if *failed == source) {
            self.load_error = None;
        }
    }

    pub fn load_error(&self) -> Option<&ServiceError> {
        self.load_error.as_ref().map(|(_, error)| error)
    }

    // La lista de municipios y la cidade elegida NO se limpian al cambiar de UF
    fn select_uf(&mut self, uf: String) {
        if uf != NONE_SELECTED {
            self.next_token += 1;
            self.city_request = Some(CityRequest {
                uf: uf.clone(),
                token: self.next_token,
            });
        }
        self.selected_uf = uf;
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.registered
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::new(
            &self.fields,
            &self.selected_uf,
            &self.selected_city,
            self.marker_position,
            &self.selected_items,
        )
    }

    /// Error a mostrar en pantalla. Los de carga solo si `surface_load_errors`.
    pub fn visible_error(&self, surface_load_errors: bool) -> Option<&ServiceError> {
        self.submit_error
            .as_ref()
            .or(self.load_error().filter(|_| surface_load_errors))
    }

    /// Destino al cerrar la confirmación de registro
    pub fn after_confirmation(&self) -> Route {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: u64, name: &str) -> City {
        City { id, name: name.to_string() }
    }

    fn select_uf(state: &mut CreatePointState, uf: &str) -> Option<CityRequest> {
        state.apply(CreatePointAction::SelectUf(uf.to_string()));
        state.city_request().cloned()
    }

    #[test]
    fn starts_with_sentinels_and_origin() {
        let state = CreatePointState::default();
        assert_eq!(state.selected_uf, "0");
        assert_eq!(state.selected_city, "0");
        assert_eq!(state.initial_position, GeoPosition::new(0.0, 0.0));
        assert_eq!(state.marker_position, GeoPosition::new(0.0, 0.0));
        assert!(state.city_request().is_none());
        assert!(state.can_submit());
    }

    #[test]
    fn sentinel_uf_never_requests_cities() {
        let mut state = CreatePointState::default();
        assert!(select_uf(&mut state, "0").is_none());

        let first = select_uf(&mut state, "RJ");
        assert_eq!(select_uf(&mut state, "0"), first);
        assert_eq!(state.selected_uf, "0");
    }

    #[test]
    fn each_uf_selection_requests_once_with_a_new_token() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        assert_eq!(sp.uf, "SP");

        let mg = select_uf(&mut state, "MG").unwrap();
        assert_eq!(mg.uf, "MG");
        assert_eq!(mg.token, sp.token + 1);
    }

    #[test]
    fn loaded_cities_replace_the_previous_list() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        state.apply(CreatePointAction::CitiesLoaded {
            token: sp.token,
            cities: vec![city(1, "São Paulo"), city(2, "Campinas")],
        });

        let ac = select_uf(&mut state, "AC").unwrap();
        state.apply(CreatePointAction::CitiesLoaded {
            token: ac.token,
            cities: vec![city(3, "Rio Branco")],
        });

        assert_eq!(state.cities, vec![city(3, "Rio Branco")]);
    }

    #[test]
    fn stale_city_responses_are_discarded() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        let rj = select_uf(&mut state, "RJ").unwrap();

        state.apply(CreatePointAction::CitiesLoaded {
            token: rj.token,
            cities: vec![city(10, "Niterói")],
        });
        state.apply(CreatePointAction::CitiesLoaded {
            token: sp.token,
            cities: vec![city(1, "São Paulo")],
        });

        assert_eq!(state.cities, vec![city(10, "Niterói")]);
    }

    #[test]
    fn changing_uf_keeps_stale_cities_and_selected_city() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        state.apply(CreatePointAction::CitiesLoaded {
            token: sp.token,
            cities: vec![city(2, "Campinas")],
        });
        state.apply(CreatePointAction::SelectCity("Campinas".into()));

        select_uf(&mut state, "BA");

        assert_eq!(state.cities, vec![city(2, "Campinas")]);
        assert_eq!(state.selected_city, "Campinas");
    }

    #[test]
    fn map_click_sets_marker_idempotently() {
        let mut state = CreatePointState::default();
        let click = GeoPosition::new(-3.7319, -38.5267);
        state.apply(CreatePointAction::MapClicked(click));
        let after_first = state.clone();
        state.apply(CreatePointAction::MapClicked(click));

        assert_eq!(state.marker_position, click);
        assert_eq!(state, after_first);
        assert_eq!(state.initial_position, GeoPosition::default());
    }

    #[test]
    fn unknown_field_names_leave_fields_untouched() {
        let mut state = CreatePointState::default();
        state.apply(CreatePointAction::FieldChanged { name: "email".into(), value: "a@b.com".into() });
        state.apply(CreatePointAction::FieldChanged { name: "cpf".into(), value: "123".into() });

        assert_eq!(
            state.fields,
            FormFields { email: "a@b.com".into(), ..FormFields::default() }
        );
    }

    #[test]
    fn payload_items_follow_selection_order() {
        let mut state = CreatePointState::default();
        for id in [6, 2, 4, 2, 1] {
            state.apply(CreatePointAction::ToggleItem(id));
        }
        assert_eq!(state.payload().items, vec![6, 4, 1]);
    }

    #[test]
    fn registration_scenario_builds_expected_body() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        state.apply(CreatePointAction::CitiesLoaded {
            token: sp.token,
            cities: vec![city(3550308, "São Paulo"), city(3509502, "Campinas")],
        });
        state.apply(CreatePointAction::SelectCity("Campinas".into()));
        state.apply(CreatePointAction::MapClicked(GeoPosition::new(-23.5, -46.6)));
        state.apply(CreatePointAction::ToggleItem(3));
        state.apply(CreatePointAction::FieldChanged { name: "name".into(), value: "Ana".into() });

        assert_eq!(
            serde_json::to_value(state.payload()).unwrap(),
            serde_json::json!({
                "name": "Ana",
                "email": "",
                "whatsapp": "",
                "uf": "SP",
                "city": "Campinas",
                "latitude": -23.5,
                "longitude": -46.6,
                "items": [3]
            })
        );
    }

    #[test]
    fn successful_submission_marks_registered() {
        let mut state = CreatePointState::default();
        state.apply(CreatePointAction::SubmitStarted);
        assert!(!state.can_submit());

        state.apply(CreatePointAction::SubmitSucceeded);
        assert!(state.registered);
        assert!(!state.submitting);
        assert!(!state.can_submit());
    }

    #[test]
    fn failed_submission_is_surfaced_and_retryable() {
        let mut state = CreatePointState::default();
        state.apply(CreatePointAction::SubmitStarted);
        state.apply(CreatePointAction::SubmitFailed(ServiceError::Http {
            status: 500,
            message: "Internal Server Error".into(),
        }));

        assert!(!state.registered);
        assert!(state.can_submit());
        assert!(matches!(state.visible_error(false), Some(ServiceError::Http { status: 500, .. })));

        state.apply(CreatePointAction::SubmitStarted);
        assert!(state.submit_error.is_none());
    }

    #[test]
    fn load_errors_are_shown_only_when_configured() {
        let mut state = CreatePointState::default();
        state.apply(CreatePointAction::LoadFailed {
            source: LoadSource::Items,
            error: ServiceError::Network("offline".into()),
        });

        assert!(state.visible_error(false).is_none());
        assert_eq!(
            state.visible_error(true),
            Some(&ServiceError::Network("offline".into()))
        );
        assert!(state.items.is_empty());
    }

    #[test]
    fn failure_of_an_abandoned_city_request_is_not_shown() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        let rj = select_uf(&mut state, "RJ").unwrap();

        state.apply(CreatePointAction::CitiesLoaded {
            token: rj.token,
            cities: vec![city(10, "Niterói")],
        });
        state.apply(CreatePointAction::CityLoadFailed {
            token: sp.token,
            error: ServiceError::Network("SP timeout".into()),
        });

        assert_eq!(state.cities, vec![city(10, "Niterói")]);
        assert!(state.visible_error(true).is_none());
    }

    #[test]
    fn failure_of_the_current_city_request_is_recorded() {
        let mut state = CreatePointState::default();
        let ba = select_uf(&mut state, "BA").unwrap();
        state.apply(CreatePointAction::CityLoadFailed {
            token: ba.token,
            error: ServiceError::Http { status: 503, message: "indisponível".into() },
        });

        assert!(matches!(state.load_error(), Some(ServiceError::Http { status: 503, .. })));
    }

    #[test]
    fn later_successful_load_clears_its_error() {
        let mut state = CreatePointState::default();
        let sp = select_uf(&mut state, "SP").unwrap();
        state.apply(CreatePointAction::CityLoadFailed {
            token: sp.token,
            error: ServiceError::Network("offline".into()),
        });

        let sp_again = select_uf(&mut state, "SP").unwrap();
        state.apply(CreatePointAction::CitiesLoaded {
            token: sp_again.token,
            cities: vec![city(1, "São Paulo")],
        });
        assert!(state.visible_error(true).is_none());

        state.apply(CreatePointAction::LoadFailed {
            source: LoadSource::Regions,
            error: ServiceError::Network("offline".into()),
        });
        state.apply(CreatePointAction::ItemsLoaded(Vec::new()));
        assert!(state.load_error().is_some());

        state.apply(CreatePointAction::RegionsLoaded(Vec::new()));
        assert!(state.load_error().is_none());
    }

    #[test]
    fn closing_the_confirmation_always_goes_home() {
        let mut state = CreatePointState::default();
        assert_eq!(state.after_confirmation(), Route::Home);

        state.apply(CreatePointAction::SelectUf("SP".into()));
        state.apply(CreatePointAction::ToggleItem(2));
        state.apply(CreatePointAction::SubmitStarted);
        state.apply(CreatePointAction::SubmitSucceeded);
        assert_eq!(state.after_confirmation(), Route::Home);
        assert_eq!(state.after_confirmation().path(), "/");
    }
}
