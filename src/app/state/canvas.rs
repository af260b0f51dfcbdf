//! Host-Komponente der Zeichenfläche aus Sicht der Tools.

use crate::app::tools::{ComponentId, InputBindings, ToolEvent, ToolHost};
use crate::core::Rect;

/// Zeichenflächen-Komponente: hält die Listener des gebundenen Tools und
/// sammelt Repaint-Anforderungen für den nächsten Frame.
#[derive(Debug, Clone)]
pub struct CanvasHost {
    id: ComponentId,
    bindings: Option<InputBindings>,
    dirty: Vec<Rect>,
}

impl CanvasHost {
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            bindings: None,
            dirty: Vec::new(),
        }
    }

    /// Hat ein Tool Listener installiert?
    pub fn has_bindings(&self) -> bool {
        self.bindings.is_some()
    }

    /// Wird das Event von den installierten Listenern abgedeckt?
    pub fn accepts(&self, event: &ToolEvent) -> bool {
        self.bindings.as_ref().is_some_and(|b| b.accepts(event))
    }

    /// Entnimmt alle seit dem letzten Frame angeforderten Repaint-Bereiche.
    pub fn take_dirty(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.dirty)
    }
}

impl ToolHost for CanvasHost {
    fn component_id(&self) -> ComponentId {
        self.id
    }

    fn install_bindings(&mut self, bindings: InputBindings) {
        if self.bindings.is_some() {
            log::warn!("Komponente {:?}: vorhandene Listener werden ersetzt", self.id);
        }
        self.bindings = Some(bindings);
    }

    fn remove_bindings(&mut self) {
        self.bindings = None;
    }

    fn repaint(&mut self, area: Rect) {
        self.dirty.push(area);
    }
}
