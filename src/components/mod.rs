pub mod app;
pub mod link;
pub mod home;
pub mod create_point;
pub mod map_picker;
pub mod locality_select;
pub mod item_grid;
pub mod confirmation_modal;

pub use app::App;
pub use link::Link;
pub use home::Home;
pub use create_point::CreatePoint;
pub use map_picker::MapPicker;
pub use locality_select::{LocalitySelect, SelectOption};
pub use item_grid::ItemGrid;
pub use confirmation_modal::ConfirmationModal;
