//! Achsenparallele Rechtecke für Bounding-Boxen und Repaint-Bereiche.

use glam::Vec2;

/// Achsenparalleles Rechteck (min inklusive, max inklusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Linke obere Ecke
    pub min: Vec2,
    /// Rechte untere Ecke
    pub max: Vec2,
}

impl Rect {
    /// Erstellt ein Rechteck aus zwei beliebigen Eckpunkten.
    pub fn from_two_points(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinstes Rechteck um alle Punkte, `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Self {
            min: first,
            max: first,
        };
        for p in iter {
            rect.include(p);
        }
        Some(rect)
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// True wenn Breite oder Höhe nicht positiv sind.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Vereinigung beider Rechtecke.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Vergrößert das Rechteck um `amount` in alle Richtungen.
    pub fn expand(&self, amount: f32) -> Rect {
        Rect {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}
