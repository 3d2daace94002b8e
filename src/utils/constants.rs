/// URL base del backend (GET /items, POST /points) si no hay BACKEND_URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3333";

/// API de localidades del IBGE
pub const DEFAULT_IBGE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

pub const DEFAULT_MAP_ZOOM: f64 = 17.0;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// Valor de la opción "Selecione" en los selects de UF y cidade
pub const NONE_SELECTED: &str = "0";

/// Id del contenedor del mapa en el DOM
pub const MAP_CONTAINER_ID: &str = "create-point-map";
