//! UI-Layer mit egui: Toolbar, Zeichenfläche, Timeline, Options-Dialog.
//!
//! Alle Komponenten lesen den `AppState` nur und liefern `AppIntent`s zurück.

mod canvas;
pub mod input;
mod keyboard;
pub mod options_dialog;
mod overlay;
pub mod status;
pub mod timeline;
pub mod toolbar;

pub use canvas::render_canvas;
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use overlay::EguiOverlayPainter;
pub use status::render_status_bar;
pub use timeline::render_timeline;
pub use toolbar::render_toolbar;
