pub mod create_point_viewmodel;

pub use create_point_viewmodel::{CityRequest, CreatePointAction, CreatePointState, LoadSource};
