// ============================================================================
// IBGE SERVICE - UFs y municipios (API pública de localidades)
// ============================================================================

use gloo_net::http::Request;

use super::error::{ensure_ok, ServiceError};
use crate::config::CONFIG;
use crate::models::{City, Region};

#[derive(Clone, Debug, PartialEq)]
pub struct IbgeClient {
    base_url: String,
}

impl IbgeClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.ibge_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn regions_url(&self) -> String {
        format!("{}/estados?orderBy=nome", self.base_url)
    }

    pub fn cities_url(&self, uf: &str) -> String {
        format!("{}/estados/{}/municipios", self.base_url, uf)
    }

    /// UFs ordenadas por nombre (el orden lo da el servicio)
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, ServiceError> {
        let response = Request::get(&self.regions_url()).send().await?;
        let regions = ensure_ok(response).await?.json::<Vec<Region>>().await?;

        log::info!("🗺️ [IBGE] {} UFs recibidas", regions.len());
        Ok(regions)
    }

    pub async fn fetch_cities(&self, uf: &str) -> Result<Vec<City>, ServiceError> {
        let response = Request::get(&self.cities_url(uf)).send().await?;
        let cities = ensure_ok(response).await?.json::<Vec<City>>().await?;

        log::info!("🏙️ [IBGE] {} municipios para {}", cities.len(), uf);
        Ok(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_ibge_localidades_urls() {
        let ibge = IbgeClient::with_base_url("https://servicodados.ibge.gov.br/api/v1/localidades");
        assert_eq!(
            ibge.regions_url(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados?orderBy=nome"
        );
        assert_eq!(
            ibge.cities_url("SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }
}
