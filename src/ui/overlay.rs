//! `OverlayPainter` für egui: sammelt Tool-Overlays als `egui::Shape`s.

use crate::app::tools::OverlayPainter;
use crate::core::GeomPath;
use glam::{Affine2, Vec2};

/// RGBA-Farbe (0..1) → `egui::Color32`.
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

pub(crate) fn to_pos2(p: Vec2) -> egui::Pos2 {
    egui::pos2(p.x, p.y)
}

pub(crate) fn to_vec2(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Füllt einen Umriss aus Hin- und Rückweg (Punkt `i` ↔ `n-1-i`) als Dreiecksstreifen.
///
/// Deckt die Geschwindigkeits-Hülle auch bei gekrümmten Shapes ab, wo
/// `convex_polygon` falsch tesselliert; Vierecke (Handles) sind ein Sonderfall.
fn ribbon_mesh(points: &[egui::Pos2], fill: egui::Color32) -> egui::Shape {
    let mut mesh = egui::Mesh::default();
    for p in points {
        mesh.colored_vertex(*p, fill);
    }
    let n = points.len() as u32;
    for i in 0..n / 2 - 1 {
        let (a, b) = (i, n - 1 - i);
        let (c, d) = (i + 1, n - 2 - i);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(c, b, d);
    }
    egui::Shape::mesh(mesh)
}

/// Zeichenziel für `SurfaceTool::paint_on_top`.
///
/// Pfade werden abgeflacht und mit der aktuellen Transformation in
/// Screen-Punkte übersetzt; der Aufrufer übergibt die Shapes an den egui-Painter.
pub struct EguiOverlayPainter {
    shapes: Vec<egui::Shape>,
    stroke: egui::Stroke,
    fill: egui::Color32,
    transform: Affine2,
}

impl Default for EguiOverlayPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiOverlayPainter {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            stroke: egui::Stroke::new(1.0, egui::Color32::WHITE),
            fill: egui::Color32::TRANSPARENT,
            transform: Affine2::IDENTITY,
        }
    }

    pub fn shapes(&self) -> &[egui::Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<egui::Shape> {
        self.shapes
    }

    fn mapped(&self, points: &[Vec2]) -> Vec<egui::Pos2> {
        points
            .iter()
            .map(|p| to_pos2(self.transform.transform_point2(*p)))
            .collect()
    }
}

impl OverlayPainter for EguiOverlayPainter {
    fn set_stroke(&mut self, width: f32, color: [f32; 4]) {
        self.stroke = egui::Stroke::new(width, color32(color));
    }

    fn set_fill(&mut self, color: [f32; 4]) {
        self.fill = color32(color);
    }

    fn stroke_path(&mut self, path: &GeomPath) {
        for (points, closed) in path.flatten() {
            let points = self.mapped(&points);
            let shape = if closed {
                egui::Shape::closed_line(points, self.stroke)
            } else {
                egui::Shape::line(points, self.stroke)
            };
            self.shapes.push(shape);
        }
    }

    fn fill_path(&mut self, path: &GeomPath) {
        for (points, _) in path.flatten() {
            if points.len() < 3 {
                continue;
            }
            let points = self.mapped(&points);
            let shape = if points.len() % 2 == 0 {
                ribbon_mesh(&points, self.fill)
            } else {
                egui::Shape::convex_polygon(points, self.fill, egui::Stroke::NONE)
            };
            self.shapes.push(shape);
        }
    }

    fn transform(&self) -> Affine2 {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }
}
