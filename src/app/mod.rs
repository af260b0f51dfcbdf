//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
mod handlers;
mod intent_mapping;
/// Application State und Host-Komponente der Zeichenfläche
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, CanvasHost, UiState};
pub use tools::{
    RenderedGesture, SurfaceTool, ToolError, ToolEvent, ToolHost, ToolManager,
};
