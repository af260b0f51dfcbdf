//! Linien-Tool: gerade Bewegung zwischen zwei Punkten.

use super::geom::{GeomShapeHooks, GeomTool};
use crate::core::GeomPath;
use crate::shared::SurfaceOptions;
use glam::Vec2;

/// Geometrie einer geraden Linie (Start, Ende).
#[derive(Debug, Clone, Default)]
pub struct LineShape {
    start: Vec2,
    end: Vec2,
}

impl LineShape {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeomShapeHooks for LineShape {
    fn name(&self) -> &str {
        "Linie"
    }

    fn num_ctrl_points(&self) -> usize {
        2
    }

    fn create_basic_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        GeomPath::polyline(&ctrl_points[..2])
    }

    fn init_control_points(&mut self, _ctrl_points: &mut [Vec2]) {}

    fn create_controlled_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        self.create_basic_shape(ctrl_points)
    }

    fn can_concatenate(&self) -> bool {
        true
    }

    fn can_accelerate(&self) -> bool {
        true
    }

    fn init_function_evaluation(&mut self, ctrl_points: &[Vec2]) -> bool {
        let [start, end, ..] = ctrl_points else {
            return false;
        };
        self.start = *start;
        self.end = *end;
        start.distance_squared(*end) > f32::EPSILON * f32::EPSILON
    }

    fn evaluate_function(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }
}

/// Linien-Tool mit Gesten-Automat.
pub fn line_tool(options: &SurfaceOptions) -> GeomTool<LineShape> {
    GeomTool::new(LineShape::new(), options)
}
