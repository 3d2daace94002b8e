pub mod use_router;
pub mod use_map;
pub mod use_create_point;

pub use use_router::{use_navigator, use_router, Navigator};
pub use use_map::use_leaflet_map;
pub use use_create_point::{use_create_point, UseCreatePointHandle};
