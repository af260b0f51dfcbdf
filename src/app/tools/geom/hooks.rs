//! Erweiterungsvertrag für konkrete Shape-Tools (Linie, Kurve, Bogen).

use super::velocity::VelocityProfile;
use crate::app::tools::OverlayPainter;
use crate::core::GeomPath;
use crate::shared::SurfaceOptions;
use glam::Vec2;

/// Darstellungs-Parameter der Gesten-Overlays.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureStyle {
    pub shape_color: [f32; 4],
    pub ctrl_point_color: [f32; 4],
    pub velocity_color: [f32; 4],
    /// Strichbreite in Pixeln
    pub stroke_width: f32,
    /// Handle-Kantenlänge in Pixeln
    pub ctrl_point_size: f32,
    /// Zusätzlicher Rand für Repaint-Bereiche
    pub repaint_padding: f32,
}

impl GestureStyle {
    pub fn from_options(options: &SurfaceOptions) -> Self {
        Self {
            shape_color: options.shape_color,
            ctrl_point_color: options.ctrl_point_color,
            velocity_color: options.velocity_color,
            stroke_width: 1.5,
            ctrl_point_size: options.ctrl_point_size_px,
            repaint_padding: options.repaint_padding_px,
        }
    }
}

/// Hooks, die ein konkretes Shape-Tool dem Gesten-Automaten liefert.
///
/// Kontrollpunkte liegen im virtuellen Raum. Punkte 0 und 1 setzt der initiale
/// Drag (Start/Ende), alle weiteren füllt `init_control_points`.
pub trait GeomShapeHooks {
    /// Anzeigename des Tools
    fn name(&self) -> &str;

    /// Anzahl Kontrollpunkte (≥ 2), fest für die Lebensdauer einer Geste.
    fn num_ctrl_points(&self) -> usize;

    /// Shape während des initialen Drags (nur Punkte 0 und 1 gültig).
    fn create_basic_shape(&self, ctrl_points: &[Vec2]) -> GeomPath;

    /// Füllt die Kontrollpunkte ab Index 2 nach dem initialen Drag.
    fn init_control_points(&mut self, ctrl_points: &mut [Vec2]);

    /// Shape aus allen Kontrollpunkten.
    fn create_controlled_shape(&self, ctrl_points: &[Vec2]) -> GeomPath;

    /// Bereitet eine Verkettung vor. `next` ist mit dem letzten Endpunkt
    /// vorbelegt; `false` verhindert die Verkettung.
    fn init_concatenation(&mut self, _previous: &[Vec2], _next: &mut [Vec2]) -> bool {
        true
    }

    /// Verwirft gestenbezogenen Zustand des Tools. Wird bei jedem Ende einer
    /// Geste aufgerufen, auch bei Abbruch.
    fn reset_gesture(&mut self) {}

    fn can_rotate(&self) -> bool {
        false
    }

    fn can_concatenate(&self) -> bool {
        false
    }

    fn can_accelerate(&self) -> bool {
        false
    }

    /// Bereitet `evaluate_function` für die gegebenen Kontrollpunkte vor.
    /// `false` wenn die Shape nicht auswertbar ist (z.B. degeneriert).
    fn init_function_evaluation(&mut self, ctrl_points: &[Vec2]) -> bool;

    /// Position der Shape bei normierter Zeit `t ∈ [0, 1]`.
    fn evaluate_function(&self, t: f32) -> Vec2;

    /// Handle-Shape für einen Kontrollpunkt (Screen-Pixel).
    fn ctrl_point_shape(&self, screen_pos: Vec2, size: f32) -> GeomPath {
        GeomPath::square(screen_pos, size)
    }

    /// Zeichnet die Gesten-Shape (Screen-Pixel).
    fn paint_shape(&self, painter: &mut dyn OverlayPainter, shape: &GeomPath, style: &GestureStyle) {
        painter.set_stroke(style.stroke_width, style.shape_color);
        painter.stroke_path(shape);
    }

    /// Zeichnet die Geschwindigkeits-Hülle (Screen-Pixel).
    fn paint_velocity_shape(
        &self,
        painter: &mut dyn OverlayPainter,
        shape: &GeomPath,
        style: &GestureStyle,
    ) {
        painter.set_fill(style.velocity_color);
        painter.fill_path(shape);
        painter.set_stroke(1.0, style.velocity_color);
        painter.stroke_path(shape);
    }

    /// Rendert die fertige Geste in `frames` zeitverzerrte Positionen.
    ///
    /// Standard: `evaluate_function` an den verzerrten Zeitpunkten des Profils.
    fn render_gesture(
        &mut self,
        ctrl_points: &[Vec2],
        velocity: &VelocityProfile,
        frames: usize,
    ) -> Option<Vec<Vec2>> {
        if !self.init_function_evaluation(ctrl_points) {
            return None;
        }
        Some(
            velocity
                .warped_times(frames)
                .into_iter()
                .map(|t| self.evaluate_function(t))
                .collect(),
        )
    }
}
