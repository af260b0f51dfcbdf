//! Meloncillo Surface Library.
//! Gesten-Werkzeuge für die Zeichenfläche als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::tools::geom::{DragState, GeomShapeHooks, GeomTool, VelocityProfile};
pub use app::{
    AppCommand, AppController, AppIntent, AppState, RenderedGesture, SurfaceTool, ToolEvent,
    ToolManager, UiState,
};
pub use core::{GeomPath, Rect, Session, ViewportSurface, VirtualSurface};
pub use shared::SurfaceOptions;
