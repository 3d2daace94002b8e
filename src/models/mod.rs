pub mod item;
pub mod locality;
pub mod geo;
pub mod point;
pub mod route;

pub use item::CatalogItem;
pub use locality::{City, Region};
pub use geo::GeoPosition;
pub use point::{FormField, FormFields, SelectedItems, SubmissionPayload};
pub use route::Route;
