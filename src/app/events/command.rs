use crate::app::tools::ToolEvent;
use crate::shared::SurfaceOptions;
use glam::Vec2;
use std::ops::Range;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Tool per Index aktivieren (altes Tool wird gelöst)
    SelectTool { index: usize },
    /// Aktives Tool lösen
    DeactivateTool,
    /// Bounds der Zeichenfläche setzen
    SetCanvasBounds { origin: Vec2, size: Vec2 },
    /// Event an das aktive Tool weiterreichen
    RouteToolEvent { event: ToolEvent },
    /// Abgeschlossene Gesten in die Session übernehmen
    ApplyRenderedGestures,
    /// Transmitter auswählen
    SelectTransmitter { index: usize },
    /// Zeitauswahl setzen
    SetTimelineSelection { range: Range<usize> },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: SurfaceOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}

impl AppCommand {
    /// Hochfrequente Zeiger-Commands, die nicht ins Command-Log gehören.
    pub fn is_pointer_motion(&self) -> bool {
        matches!(
            self,
            AppCommand::RouteToolEvent {
                event: ToolEvent::Moved { .. } | ToolEvent::Dragged { .. }
            }
        )
    }
}
