/// Rutas de la app. Cualquier path desconocido cae en `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CreatePoint,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/create-point" => Route::CreatePoint,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreatePoint => "/create-point",
        }
    }
}
