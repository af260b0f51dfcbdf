//! Bogen-Tool: Kreisbogen durch Start, Scheitel und Ende.
//!
//! Kontrollpunkte: `[Start, Ende, Scheitel]`. Liegen die drei Punkte auf einer
//! Geraden, wird der Bogen zur Strecke.

use super::geom::{GeomShapeHooks, GeomTool};
use crate::core::GeomPath;
use crate::shared::SurfaceOptions;
use glam::Vec2;
use std::f32::consts::TAU;

/// Stützstellen der Bogen-Polylinie.
const ARC_STEPS: usize = 48;
/// Anfangshöhe des Scheitels relativ zur Sehnenlänge.
const APEX_RATIO: f32 = 0.25;

/// Parametrisierter Bogen (oder Strecke bei kollinearen Punkten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcPath {
    Circle {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        /// Vorzeichenbehafteter Überstreichwinkel (Radiant)
        sweep: f32,
    },
    Line { start: Vec2, end: Vec2 },
}

impl ArcPath {
    /// Kreisbogen von `start` über `apex` nach `end`.
    pub fn through(start: Vec2, apex: Vec2, end: Vec2) -> Self {
        let d = 2.0
            * (start.x * (apex.y - end.y) + apex.x * (end.y - start.y) + end.x * (start.y - apex.y));
        let scale = start.distance(end).max(start.distance(apex)).max(f32::EPSILON);
        if d.abs() < 1e-6 * scale * scale {
            return ArcPath::Line { start, end };
        }

        let (a2, b2, c2) = (
            start.length_squared(),
            apex.length_squared(),
            end.length_squared(),
        );
        let center = Vec2::new(
            (a2 * (apex.y - end.y) + b2 * (end.y - start.y) + c2 * (start.y - apex.y)) / d,
            (a2 * (end.x - apex.x) + b2 * (start.x - end.x) + c2 * (apex.x - start.x)) / d,
        );
        let angle_of = |p: Vec2| (p - center).y.atan2((p - center).x);
        let start_angle = angle_of(start);
        let to_end = (angle_of(end) - start_angle).rem_euclid(TAU);
        let to_apex = (angle_of(apex) - start_angle).rem_euclid(TAU);
        // Drehrichtung so wählen, dass der Bogen den Scheitel enthält
        let sweep = if to_apex <= to_end {
            to_end
        } else {
            to_end - TAU
        };

        ArcPath::Circle {
            center,
            radius: start.distance(center),
            start_angle,
            sweep,
        }
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            ArcPath::Circle {
                center,
                radius,
                start_angle,
                sweep,
            } => center + Vec2::from_angle(start_angle + sweep * t) * radius,
            ArcPath::Line { start, end } => start.lerp(end, t),
        }
    }

    pub fn to_path(&self) -> GeomPath {
        let points: Vec<Vec2> = (0..=ARC_STEPS)
            .map(|i| self.point_at(i as f32 / ARC_STEPS as f32))
            .collect();
        GeomPath::polyline(&points)
    }
}

/// Geometrie des Bogen-Tools.
#[derive(Debug, Clone)]
pub struct ArcShape {
    arc: ArcPath,
}

impl Default for ArcShape {
    fn default() -> Self {
        Self {
            arc: ArcPath::Line {
                start: Vec2::ZERO,
                end: Vec2::ZERO,
            },
        }
    }
}

impl ArcShape {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeomShapeHooks for ArcShape {
    fn name(&self) -> &str {
        "Bogen"
    }

    fn num_ctrl_points(&self) -> usize {
        3
    }

    fn create_basic_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        GeomPath::polyline(&ctrl_points[..2])
    }

    fn init_control_points(&mut self, ctrl_points: &mut [Vec2]) {
        let (start, end) = (ctrl_points[0], ctrl_points[1]);
        let chord = end - start;
        ctrl_points[2] = (start + end) * 0.5 + chord.perp() * APEX_RATIO;
    }

    fn create_controlled_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        ArcPath::through(ctrl_points[0], ctrl_points[2], ctrl_points[1]).to_path()
    }

    fn can_accelerate(&self) -> bool {
        true
    }

    fn init_function_evaluation(&mut self, ctrl_points: &[Vec2]) -> bool {
        let [start, end, apex] = ctrl_points else {
            return false;
        };
        if start.distance_squared(*end) <= f32::EPSILON * f32::EPSILON {
            return false;
        }
        self.arc = ArcPath::through(*start, *apex, *end);
        true
    }

    fn evaluate_function(&self, t: f32) -> Vec2 {
        self.arc.point_at(t)
    }
}

/// Bogen-Tool mit Gesten-Automat.
pub fn arc_tool(options: &SurfaceOptions) -> GeomTool<ArcShape> {
    GeomTool::new(ArcShape::new(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_half_circle_through_apex() {
        let arc = ArcPath::through(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        let ArcPath::Circle { center, radius, sweep, .. } = arc else {
            panic!("Kreisbogen erwartet, war {arc:?}");
        };
        assert_relative_eq!(center.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(radius, 1.0, epsilon = 1e-5);
        assert_relative_eq!(sweep.abs(), PI, epsilon = 1e-5);

        let mid = arc.point_at(0.5);
        assert_relative_eq!(mid.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y, 1.0, epsilon = 1e-5);
        let end = arc.point_at(1.0);
        assert_relative_eq!(end.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_mirrored_apex_reverses_sweep() {
        let up = ArcPath::through(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0));
        let down = ArcPath::through(Vec2::ZERO, Vec2::new(1.0, -1.0), Vec2::new(2.0, 0.0));
        assert_relative_eq!(down.point_at(0.5).y, -1.0, epsilon = 1e-5);
        assert!(up.point_at(0.25).y > 0.0);
        assert!(down.point_at(0.25).y < 0.0);
    }

    #[test]
    fn test_collinear_points_become_line() {
        let arc = ArcPath::through(Vec2::ZERO, Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0));
        assert!(matches!(arc, ArcPath::Line { .. }));
        assert_relative_eq!(arc.point_at(0.25).x, 0.25);
    }

    #[test]
    fn test_initial_apex_above_chord_middle() {
        let mut shape = ArcShape::new();
        let mut points = [Vec2::ZERO, Vec2::new(0.4, 0.0), Vec2::ZERO];
        shape.init_control_points(&mut points);
        assert_relative_eq!(points[2].x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(points[2].y, 0.1, epsilon = 1e-6);

        assert!(shape.init_function_evaluation(&points));
        let top = shape.evaluate_function(0.5);
        assert_relative_eq!(top.y, 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_closed_arc_not_evaluable() {
        let mut shape = ArcShape::new();
        let p = Vec2::splat(0.5);
        assert!(!shape.init_function_evaluation(&[p, p, Vec2::ONE]));
        assert!(!shape.can_concatenate());
    }

    #[test]
    fn test_controlled_shape_samples_arc() {
        let shape = ArcShape::new();
        let path = shape.create_controlled_shape(&[
            Vec2::ZERO,
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 1.0),
        ]);
        let bounds = path.bounds().expect("Bounds");
        assert_relative_eq!(bounds.height(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(bounds.width(), 2.0, epsilon = 1e-4);
    }
}
