use serde::{Deserialize, Serialize};

/// Item de coleta del catálogo del backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

/// Respuesta de `GET /items`
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<CatalogItem>,
}
