//! SurfaceTool-Trait: Schnittstelle für alle Werkzeuge der Zeichenfläche.

use super::{
    ComponentId, InputBindings, Key, OverlayPainter, RenderedGesture, ToolError, ToolEvent,
    ToolHost,
};
use crate::core::VirtualSurface;
use crate::shared::SurfaceOptions;

/// Bindung eines Tools an höchstens eine Host-Komponente.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolBinding {
    component: Option<ComponentId>,
}

impl ToolBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell gebundene Komponente.
    pub fn component(&self) -> Option<ComponentId> {
        self.component
    }

    pub fn is_bound_to(&self, id: ComponentId) -> bool {
        self.component == Some(id)
    }

    /// Bindet an `component`. Fehler wenn bereits gebunden oder keine Komponente.
    pub fn bind(&mut self, component: Option<ComponentId>) -> Result<ComponentId, ToolError> {
        if let Some(bound) = self.component {
            return Err(ToolError::AlreadyAcquired(bound));
        }
        let id = component.ok_or(ToolError::NoComponent)?;
        self.component = Some(id);
        Ok(id)
    }

    /// Prüft, dass genau `component` gebunden ist.
    pub fn check(&self, component: ComponentId) -> Result<(), ToolError> {
        match self.component {
            None => Err(ToolError::NotAcquired),
            Some(bound) if bound != component => Err(ToolError::ForeignComponent {
                bound,
                requested: component,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Löst die Bindung (nach erfolgreichem `check`).
    pub fn release(&mut self) {
        self.component = None;
    }
}

/// Schnittstelle für alle Werkzeuge der Zeichenfläche (Linie, Bézier, Bogen, …).
///
/// Alle Methoden laufen auf dem UI-Thread des Hosts; es gibt keine Locks.
pub trait SurfaceTool {
    /// Anzeigename für die Toolbar
    fn name(&self) -> &str;

    /// Statustext für die Statusleiste (z.B. "Ziehen zum Zeichnen")
    fn status_text(&self) -> &str;

    fn binding(&self) -> &ToolBinding;

    fn binding_mut(&mut self) -> &mut ToolBinding;

    /// Bricht eine laufende Geste ab (Escape, Dismiss).
    fn cancel_gesture(&mut self, host: &mut dyn ToolHost);

    /// Verarbeitet ein Maus-/Tastatur-Event (Escape ist bereits abgefangen).
    fn process_event(
        &mut self,
        event: &ToolEvent,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    );

    /// Zeichnet transiente Gesten-Visuals über die Komponente.
    fn paint_on_top(&self, painter: &mut dyn OverlayPainter, surface: &dyn VirtualSurface);

    /// Entnimmt alle seit dem letzten Aufruf abgeschlossenen Gesten.
    fn take_rendered(&mut self) -> Vec<RenderedGesture>;

    /// Läuft gerade eine Geste?
    fn is_drawing(&self) -> bool;

    /// Übernimmt geänderte Laufzeit-Optionen.
    fn apply_options(&mut self, _options: &SurfaceOptions) {}

    /// Bindet das Tool an eine Komponente und installiert Listener + Escape-Bindung.
    fn acquire(&mut self, host: Option<&mut dyn ToolHost>) -> Result<(), ToolError> {
        if let Some(bound) = self.binding().component() {
            return Err(ToolError::AlreadyAcquired(bound));
        }
        let host = host.ok_or(ToolError::NoComponent)?;
        self.binding_mut().bind(Some(host.component_id()))?;
        host.install_bindings(InputBindings::pointer_with_cancel());
        Ok(())
    }

    /// Löst das Tool von der Komponente; bricht vorher die laufende Geste ab.
    fn dismiss(&mut self, host: &mut dyn ToolHost) -> Result<(), ToolError> {
        self.binding().check(host.component_id())?;
        self.cancel_gesture(host);
        host.remove_bindings();
        self.binding_mut().release();
        Ok(())
    }

    /// Einstieg für Host-Events: filtert fremde Komponenten und routet Escape.
    fn handle_event(
        &mut self,
        event: &ToolEvent,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        if !self.binding().is_bound_to(host.component_id()) {
            log::debug!(
                "{}: Event von ungebundener Komponente {:?} ignoriert",
                self.name(),
                host.component_id()
            );
            return;
        }
        match event {
            ToolEvent::KeyPressed {
                key: Key::Escape, ..
            } => self.cancel_gesture(host),
            _ => self.process_event(event, surface, host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_twice_fails() {
        let mut binding = ToolBinding::new();
        assert_eq!(binding.bind(Some(ComponentId(1))), Ok(ComponentId(1)));
        assert_eq!(
            binding.bind(Some(ComponentId(2))),
            Err(ToolError::AlreadyAcquired(ComponentId(1)))
        );
    }

    #[test]
    fn test_bind_without_component_fails() {
        let mut binding = ToolBinding::new();
        assert_eq!(binding.bind(None), Err(ToolError::NoComponent));
        assert_eq!(binding.component(), None);
    }

    #[test]
    fn test_check_detects_foreign_component() {
        let mut binding = ToolBinding::new();
        assert_eq!(binding.check(ComponentId(1)), Err(ToolError::NotAcquired));
        binding.bind(Some(ComponentId(1))).expect("Bindung");
        assert_eq!(
            binding.check(ComponentId(7)),
            Err(ToolError::ForeignComponent {
                bound: ComponentId(1),
                requested: ComponentId(7),
            })
        );
        binding.release();
        assert_eq!(binding.check(ComponentId(1)), Err(ToolError::NotAcquired));
    }
}
