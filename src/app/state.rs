//! Application State: zentrale Datenhaltung.

mod app_state;
mod canvas;

pub use app_state::{AppState, UiState};
pub use canvas::CanvasHost;
