//! Application State: zentrale Datenhaltung.

mod app_state;
mod view;

pub use app_state::{AnimationStats, AppState};
pub use view::ViewState;
