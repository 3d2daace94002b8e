// ============================================================================
// API CLIENT - Backend de E-coleta (solo HTTP, sin estado)
// ============================================================================

use gloo_net::http::Request;

use super::error::{ensure_ok, ServiceError};
use crate::config::CONFIG;
use crate::models::item::ItemsResponse;
use crate::models::{CatalogItem, SubmissionPayload};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.base_url)
    }

    /// Catálogo de items de coleta
    pub async fn fetch_items(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        let response = Request::get(&self.items_url()).send().await?;
        let response = ensure_ok(response).await?;
        let body = response.json::<ItemsResponse>().await?;

        log::info!("♻️ [API] {} items de coleta recibidos", body.items.len());
        Ok(body.items)
    }

    /// Registrar un punto de coleta. El cuerpo de la respuesta no se usa.
    pub async fn create_point(&self, payload: &SubmissionPayload) -> Result<(), ServiceError> {
        log::info!(
            "📝 [API] Registrando punto '{}' en {}/{} con {} items",
            payload.name,
            payload.city,
            payload.uf,
            payload.items.len()
        );

        let response = Request::post(&self.points_url())
            .json(payload)
            .map_err(|e| ServiceError::Serialization(e.to_string()))?
            .send()
            .await?;
        ensure_ok(response).await?;

        log::info!("✅ [API] Punto registrado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base_without_trailing_slash() {
        let api = ApiClient::with_base_url("http://localhost:3333/");
        assert_eq!(api.items_url(), "http://localhost:3333/items");
        assert_eq!(api.points_url(), "http://localhost:3333/points");
    }
}
