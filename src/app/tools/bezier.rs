//! Bézier-Tool: kubische Kurve mit zwei Steuerpunkten.
//!
//! Kontrollpunkte: `[Start, Ende, CP1, CP2]`. Nach dem initialen Drag liegen
//! CP1/CP2 auf den Sehnen-Dritteln; bei Verkettung setzt CP1 die Tangente
//! der vorherigen Kurve fort.

use super::geom::{GeomShapeHooks, GeomTool};
use crate::core::{cubic_bezier, GeomPath};
use crate::shared::SurfaceOptions;
use glam::Vec2;

/// Geometrie einer kubischen Bézier-Kurve.
#[derive(Debug, Clone, Default)]
pub struct BezierShape {
    /// Ausgewertete Punkte: Start, CP1, CP2, Ende
    curve: [Vec2; 4],
    /// Tangente am Ende der vorherigen Kurve (nur während einer Verkettung)
    pending_tangent: Option<Vec2>,
}

impl BezierShape {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Steuerpunkt im Abstand Sehne/3 entlang `direction`.
fn tangent_ctrl_point(anchor: Vec2, direction: Vec2, chord_length: f32) -> Vec2 {
    anchor + direction.normalize_or_zero() * (chord_length / 3.0)
}

impl GeomShapeHooks for BezierShape {
    fn name(&self) -> &str {
        "Bézier"
    }

    fn num_ctrl_points(&self) -> usize {
        4
    }

    fn create_basic_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        GeomPath::polyline(&ctrl_points[..2])
    }

    fn init_control_points(&mut self, ctrl_points: &mut [Vec2]) {
        let (start, end) = (ctrl_points[0], ctrl_points[1]);
        let chord = end - start;
        ctrl_points[2] = match self.pending_tangent.take() {
            Some(direction) => tangent_ctrl_point(start, direction, chord.length()),
            None => start + chord / 3.0,
        };
        ctrl_points[3] = start + chord * (2.0 / 3.0);
    }

    fn create_controlled_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        let mut path = GeomPath::new();
        path.move_to(ctrl_points[0])
            .cubic_to(ctrl_points[2], ctrl_points[3], ctrl_points[1]);
        path
    }

    fn init_concatenation(&mut self, previous: &[Vec2], _next: &mut [Vec2]) -> bool {
        let [_, end, _, ctrl2, ..] = previous else {
            return false;
        };
        let tangent = *end - *ctrl2;
        self.pending_tangent = (tangent.length_squared() > f32::EPSILON).then_some(tangent);
        true
    }

    fn reset_gesture(&mut self) {
        self.pending_tangent = None;
    }

    fn can_concatenate(&self) -> bool {
        true
    }

    fn can_accelerate(&self) -> bool {
        true
    }

    fn init_function_evaluation(&mut self, ctrl_points: &[Vec2]) -> bool {
        let [start, end, ctrl1, ctrl2] = ctrl_points else {
            return false;
        };
        self.curve = [*start, *ctrl1, *ctrl2, *end];
        self.curve
            .iter()
            .any(|p| p.distance_squared(*start) > f32::EPSILON * f32::EPSILON)
    }

    fn evaluate_function(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.curve;
        cubic_bezier(p0, p1, p2, p3, t)
    }
}

/// Bézier-Tool mit Gesten-Automat.
pub fn bezier_tool(options: &SurfaceOptions) -> GeomTool<BezierShape> {
    GeomTool::new(BezierShape::new(), options)
}
