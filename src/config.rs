use crate::utils::constants::{DEFAULT_BACKEND_URL, DEFAULT_IBGE_URL, DEFAULT_MAP_ZOOM, DEFAULT_TILE_URL};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub ibge_url: String,
    pub enable_logging: bool,
    /// Mostrar en pantalla los errores de carga (items, UFs, cidades).
    /// Por defecto solo se registran en consola.
    pub surface_load_errors: bool,
    pub map_config: MapConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub zoom: f64,
    pub tile_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_MAP_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            ibge_url: DEFAULT_IBGE_URL.to_string(),
            enable_logging: true,
            surface_load_errors: false,
            map_config: MapConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("IBGE_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SURFACE_LOAD_ERRORS"),
            option_env!("MAP_ZOOM"),
            option_env!("MAP_TILE_URL"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        ibge_url: Option<&str>,
        enable_logging: Option<&str>,
        surface_load_errors: Option<&str>,
        map_zoom: Option<&str>,
        tile_url: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(trim_base_url)
                .unwrap_or(defaults.backend_url),
            ibge_url: ibge_url
                .map(trim_base_url)
                .unwrap_or(defaults.ibge_url),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            surface_load_errors: surface_load_errors
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.surface_load_errors),
            map_config: MapConfig {
                zoom: map_zoom
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.map_config.zoom),
                tile_url: tile_url
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_url),
            },
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
