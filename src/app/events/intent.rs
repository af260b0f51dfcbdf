use crate::app::tools::ToolEvent;
use crate::shared::SurfaceOptions;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Gesten-Tool auswählen (per Index im ToolManager)
    SelectToolRequested { index: usize },
    /// Aktives Tool lösen (kein Werkzeug)
    DeselectToolRequested,
    /// Zeichenfläche hat Position oder Größe geändert (Screen-Pixel)
    CanvasResized { origin: Vec2, size: Vec2 },
    /// Maus-/Tastatur-Event auf der Zeichenfläche
    CanvasInput { event: ToolEvent },
    /// Transmitter für Gesten auswählen
    TransmitterSelected { index: usize },
    /// Zeitauswahl geändert (Frames, Ende exklusiv)
    TimelineSelectionChanged { start: usize, end: usize },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: SurfaceOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
