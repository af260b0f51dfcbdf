//! Minimale Repaint-Bereiche für transiente Gesten-Shapes.

use crate::app::tools::ToolHost;
use crate::core::Rect;

/// Neu zu zeichnende Bereiche nach einer Shape-Änderung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepaintPlan {
    Nothing,
    /// Ein Bereich deckt alte und neue Shape ab
    Single(Rect),
    /// Zwei getrennte Bereiche (Vereinigung wäre größer)
    Split(Rect, Rect),
}

impl RepaintPlan {
    /// Vergleicht alte und neue Bounds: ein Aufruf, wenn die Vereinigung
    /// kleiner ist als beide Flächen zusammen, sonst zwei.
    pub fn between(old: Option<Rect>, new: Option<Rect>) -> Self {
        match (old, new) {
            (None, None) => RepaintPlan::Nothing,
            (Some(r), None) | (None, Some(r)) => RepaintPlan::Single(r),
            (Some(a), Some(b)) => {
                let union = a.union(&b);
                if union.area() < a.area() + b.area() {
                    RepaintPlan::Single(union)
                } else {
                    RepaintPlan::Split(a, b)
                }
            }
        }
    }

    pub fn rects(&self) -> Vec<Rect> {
        match *self {
            RepaintPlan::Nothing => Vec::new(),
            RepaintPlan::Single(r) => vec![r],
            RepaintPlan::Split(a, b) => vec![a, b],
        }
    }

    /// Reicht die Bereiche an den Host weiter.
    pub fn apply(&self, host: &mut dyn ToolHost) {
        for rect in self.rects() {
            host.repaint(rect);
        }
    }
}
