//! Handler für die Zeichenfläche (Viewport-Bounds).

use crate::app::AppState;
use glam::Vec2;

/// Setzt Ursprung und Größe der Zeichenfläche in Screen-Pixeln.
pub fn set_canvas_bounds(state: &mut AppState, origin: Vec2, size: Vec2) {
    if state.surface.origin == origin && state.surface.size == size {
        return;
    }
    if state.is_drawing() {
        log::debug!("Zeichenfläche geändert während einer Geste");
    }
    state.surface.set_bounds(origin, size);
}
