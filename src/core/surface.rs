//! Virtuelle Oberfläche: Umrechnung zwischen normiertem Raum und Screen-Pixeln.
//!
//! Der virtuelle Raum ist das Einheitsquadrat [0,1]×[0,1], unabhängig von der
//! Bildschirmauflösung. Alle Kontrollpunkte der Gesten-Tools leben dort; nur
//! Hit-Tests, Drag-Schwellen und Repaint-Bereiche rechnen in Screen-Pixeln.

use super::path::GeomPath;
use glam::Vec2;

/// Koordinaten-Umrechnung und Snapping für eine Zeichenfläche.
pub trait VirtualSurface {
    /// Screen-Pixel → virtueller Raum.
    fn screen_to_virtual(&self, screen_pos: Vec2) -> Vec2;

    /// Virtueller Raum → Screen-Pixel.
    fn virtual_to_screen(&self, virtual_pos: Vec2) -> Vec2;

    /// Rastet einen virtuellen Punkt auf Objekte oder Raster ein.
    fn snap(&self, virtual_pos: Vec2) -> Vec2;

    /// Wandelt einen virtuellen Pfad in Screen-Koordinaten.
    fn virtual_to_screen_path(&self, path: &GeomPath) -> GeomPath {
        path.map_points(|p| self.virtual_to_screen(p))
    }

    /// Wandelt einen Screen-Pfad in den virtuellen Raum.
    fn screen_to_virtual_path(&self, path: &GeomPath) -> GeomPath {
        path.map_points(|p| self.screen_to_virtual(p))
    }

    /// Screen-Position → gesnappte virtuelle Position.
    fn snap_screen(&self, screen_pos: Vec2) -> Vec2 {
        self.snap(self.screen_to_virtual(screen_pos))
    }
}

/// Rechteckige Zeichenfläche im Viewport mit Objekt- und Raster-Snap.
#[derive(Debug, Clone)]
pub struct ViewportSurface {
    /// Linke obere Ecke der Fläche in Screen-Pixeln
    pub origin: Vec2,
    /// Größe der Fläche in Screen-Pixeln
    pub size: Vec2,
    /// Snap-Radius in virtuellen Einheiten
    pub snap_radius: f32,
    /// Rasterweite in virtuellen Einheiten (`None` = kein Raster-Snap)
    pub grid: Option<f32>,
    /// Positionen einrastbarer Objekte (z.B. Receiver) im virtuellen Raum
    pub anchors: Vec<Vec2>,
}

impl ViewportSurface {
    /// Erstellt eine Fläche ohne Snap-Ziele.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            origin,
            size,
            snap_radius: 0.0,
            grid: None,
            anchors: Vec::new(),
        }
    }

    /// Passt Ursprung und Größe an (Viewport-Resize).
    pub fn set_bounds(&mut self, origin: Vec2, size: Vec2) {
        self.origin = origin;
        self.size = size;
    }

    /// Größe mit Mindestwert 1 px pro Achse (verhindert Division durch 0).
    fn safe_size(&self) -> Vec2 {
        self.size.max(Vec2::ONE)
    }

    /// Nächster Anker innerhalb des Snap-Radius.
    fn nearest_anchor(&self, pos: Vec2) -> Option<Vec2> {
        self.anchors
            .iter()
            .map(|a| (*a, a.distance(pos)))
            .filter(|(_, d)| *d <= self.snap_radius)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(a, _)| a)
    }
}

impl VirtualSurface for ViewportSurface {
    fn screen_to_virtual(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.origin) / self.safe_size()
    }

    fn virtual_to_screen(&self, virtual_pos: Vec2) -> Vec2 {
        self.origin + virtual_pos * self.safe_size()
    }

    fn snap(&self, virtual_pos: Vec2) -> Vec2 {
        if let Some(anchor) = self.nearest_anchor(virtual_pos) {
            return anchor;
        }
        match self.grid {
            Some(step) if step > f32::EPSILON => (virtual_pos / step).round() * step,
            _ => virtual_pos,
        }
    }
}
