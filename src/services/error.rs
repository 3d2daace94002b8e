use gloo_net::http::Response;

/// Error de cualquier llamada externa (backend, IBGE, geolocalización)
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Geolocation(String),
    /// API del navegador no disponible (sin window, sin geolocation...)
    Unavailable(&'static str),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "Network error: {}", msg),
            ServiceError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ServiceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ServiceError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            ServiceError::Geolocation(msg) => write!(f, "Geolocation error: {}", msg),
            ServiceError::Unavailable(api) => write!(f, "Browser API unavailable: {}", api),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<gloo_net::Error> for ServiceError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ServiceError::Parse(e.to_string()),
            other => ServiceError::Network(other.to_string()),
        }
    }
}

/// Devuelve la respuesta si es 2xx; si no, el status y el cuerpo como error
pub(crate) async fn ensure_ok(response: Response) -> Result<Response, ServiceError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => response.status_text(),
    };
    Err(ServiceError::Http { status, message })
}
