//! Mehrfachklick-Erkennung für Press-Events.

use glam::Vec2;

/// Max. Zeit zwischen zwei Klicks eines Mehrfachklicks (Sekunden).
const MULTI_CLICK_DELAY: f64 = 0.3;
/// Max. Mausweg zwischen zwei Klicks eines Mehrfachklicks (Pixel).
const MULTI_CLICK_DIST: f32 = 6.0;

/// Zählt aufeinanderfolgende Klicks an (nahezu) derselben Stelle.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClickCounter {
    last: Option<(Vec2, f64)>,
    count: u32,
}

impl ClickCounter {
    /// Registriert einen Press und gibt die Klickzahl zurück (1 = Einfachklick).
    pub(crate) fn register(&mut self, pos: Vec2, time: f64) -> u32 {
        let continues = self.last.is_some_and(|(last_pos, last_time)| {
            time - last_time <= MULTI_CLICK_DELAY && last_pos.distance(pos) <= MULTI_CLICK_DIST
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last = Some((pos, time));
        self.count
    }
}
