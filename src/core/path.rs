//! Geometrische Pfade (Linien, Bézier-Segmente) für Gesten-Shapes.
//!
//! `GeomPath` ist das Gegenstück zu einer allgemeinen 2D-Shape: eine Folge von
//! Segmenten, die sich in Bounding-Boxen, Polylinien und andere Koordinatenräume
//! überführen lässt. Shapes werden pro Mutation neu berechnet und nie geteilt.

use super::geometry::Rect;
use glam::Vec2;

/// Anzahl Stützstellen pro Kurvensegment beim Abflachen.
const FLATTEN_STEPS: usize = 24;

/// Ein einzelnes Pfadsegment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Neuer Teilpfad ab Punkt
    MoveTo(Vec2),
    /// Gerade zum Punkt
    LineTo(Vec2),
    /// Quadratische Bézier (Steuerpunkt, Endpunkt)
    QuadTo(Vec2, Vec2),
    /// Kubische Bézier (Steuerpunkt 1, Steuerpunkt 2, Endpunkt)
    CubicTo(Vec2, Vec2, Vec2),
    /// Schließt den aktuellen Teilpfad
    Close,
}

/// Pfad aus Segmenten in beliebigem Koordinatenraum (virtuell oder Screen).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeomPath {
    segments: Vec<PathSegment>,
}

impl GeomPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offene Polylinie durch alle Punkte.
    pub fn polyline(points: &[Vec2]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
        }
        path
    }

    /// Achsenparalleles Quadrat mit Mittelpunkt und Kantenlänge.
    pub fn square(center: Vec2, size: f32) -> Self {
        let h = size * 0.5;
        let mut path = Self::new();
        path.move_to(center + Vec2::new(-h, -h));
        path.line_to(center + Vec2::new(h, -h));
        path.line_to(center + Vec2::new(h, h));
        path.line_to(center + Vec2::new(-h, h));
        path.close();
        path
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) -> &mut Self {
        self.segments.push(PathSegment::QuadTo(ctrl, end));
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, end: Vec2) -> &mut Self {
        self.segments.push(PathSegment::CubicTo(ctrl1, ctrl2, end));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Hängt alle Segmente eines anderen Pfads an.
    pub fn append(&mut self, other: &GeomPath) {
        self.segments.extend_from_slice(&other.segments);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Alle Stützpunkte inkl. Bézier-Steuerpunkte.
    fn control_hull(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.segments.iter().flat_map(|seg| {
            let pts: Vec<Vec2> = match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
                PathSegment::QuadTo(c, p) => vec![c, p],
                PathSegment::CubicTo(c1, c2, p) => vec![c1, c2, p],
                PathSegment::Close => Vec::new(),
            };
            pts
        })
    }

    /// Bounding-Box über die Kontrollhülle (konservativ bei Bézier-Segmenten).
    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.control_hull())
    }

    /// Bildet jeden Punkt des Pfads über `f` ab (z.B. virtuell → Screen).
    pub fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> GeomPath {
        let segments = self
            .segments
            .iter()
            .map(|seg| match *seg {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
                PathSegment::QuadTo(c, p) => PathSegment::QuadTo(f(c), f(p)),
                PathSegment::CubicTo(c1, c2, p) => PathSegment::CubicTo(f(c1), f(c2), f(p)),
                PathSegment::Close => PathSegment::Close,
            })
            .collect();
        GeomPath { segments }
    }

    /// Flacht den Pfad zu Polylinien ab. Das Flag gibt an, ob der Teilpfad geschlossen ist.
    pub fn flatten(&self) -> Vec<(Vec<Vec2>, bool)> {
        let mut result = Vec::new();
        let mut current: Vec<Vec2> = Vec::new();
        let mut last = Vec2::ZERO;

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    if current.len() > 1 {
                        result.push((std::mem::take(&mut current), false));
                    }
                    current.clear();
                    current.push(p);
                    last = p;
                }
                PathSegment::LineTo(p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    current.push(p);
                    last = p;
                }
                PathSegment::QuadTo(c, p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    let p0 = last;
                    current.extend(
                        (1..=FLATTEN_STEPS)
                            .map(|i| quadratic_bezier(p0, c, p, i as f32 / FLATTEN_STEPS as f32)),
                    );
                    last = p;
                }
                PathSegment::CubicTo(c1, c2, p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    let p0 = last;
                    current.extend(
                        (1..=FLATTEN_STEPS).map(|i| {
                            cubic_bezier(p0, c1, c2, p, i as f32 / FLATTEN_STEPS as f32)
                        }),
                    );
                    last = p;
                }
                PathSegment::Close => {
                    if current.len() > 1 {
                        if let Some(&first) = current.first() {
                            last = first;
                        }
                        result.push((std::mem::take(&mut current), true));
                    }
                }
            }
        }
        if current.len() > 1 {
            result.push((current, false));
        }
        result
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}
