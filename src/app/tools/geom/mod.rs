//! Gemeinsamer Gesten-Automat für geometrische Tools.
//!
//! Ablauf einer Geste:
//! 1. Press → `Init`; Drag über die Schwelle → `InitDrag` (Start/Ende aufziehen)
//! 2. Release → `Ctrl`: alle Kontrollpunkte per Drag editierbar
//! 3. Doppelklick → `Velocity`: Start-/Stop-Geschwindigkeit an den Enden ziehen
//! 4. Enter rendert die Geste, Ctrl+Enter verkettet die nächste, Escape bricht ab
//!
//! Konkrete Tools liefern nur die Geometrie über `GeomShapeHooks`.

mod gesture;
mod hooks;
mod repaint;
mod state;
mod velocity;

pub use gesture::{GeomTool, CTRL_HIT_DIST_SQ, DRAG_THRESHOLD_SQ};
pub use hooks::{GeomShapeHooks, GestureStyle};
pub use repaint::RepaintPlan;
pub use state::DragState;
pub use velocity::{
    drag_velocity_point, profile_from_ctrl_points, velocity_ctrl_points, velocity_shape,
    VelocityProfile, VelocitySamples, TANGENT_DT, VELOCITY_MAX, VELO_NORM, VELO_POINTS,
};

#[cfg(test)]
mod tests;
