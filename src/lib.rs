// ============================================================================
// E-COLETA - Registro de pontos de coleta (Yew + WASM)
// ============================================================================
// - Components: vistas Yew (sin lógica)
// - Hooks: conectan componentes con ViewModels y servicios
// - ViewModels: estado + transiciones puras (testeables sin navegador)
// - Services: SOLO comunicación (backend, IBGE, geolocalización)
// - Models: estructuras serde compartidas con las APIs
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
