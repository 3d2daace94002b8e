pub mod error;
pub mod api_client;
pub mod ibge_service;
pub mod geolocation;

pub use error::ServiceError;
pub use api_client::ApiClient;
pub use ibge_service::IbgeClient;
pub use geolocation::current_position;
