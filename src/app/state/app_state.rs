use crate::app::tools::{ComponentId, ToolManager};
use crate::app::CommandLog;
use crate::core::{Session, ViewportSurface};
use crate::shared::SurfaceOptions;
use glam::Vec2;
use std::ops::Range;

use super::CanvasHost;

/// Komponenten-ID der (einzigen) Zeichenfläche.
const CANVAS_ID: ComponentId = ComponentId(1);

/// UI-bezogener Zustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Status- oder Fehlermeldung
    pub status_message: Option<String>,
    /// Zuletzt von einer Geste beschriebener Frame-Bereich
    pub last_written: Option<Range<usize>>,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Receiver, Transmitter und Timeline
    pub session: Session,
    /// Registrierte Gesten-Tools
    pub tools: ToolManager,
    /// Koordinaten-Umrechnung und Snapping der Zeichenfläche
    pub surface: ViewportSurface,
    /// Host-Komponente, an die das aktive Tool gebunden ist
    pub canvas: CanvasHost,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: SurfaceOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen und Demo-Session.
    pub fn new() -> Self {
        Self::with_options(SurfaceOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen und Demo-Session.
    pub fn with_options(options: SurfaceOptions) -> Self {
        let session = Session::demo(options.timeline_rate, options.timeline_seconds);
        let mut surface = ViewportSurface::new(Vec2::ZERO, Vec2::ONE);
        surface.anchors = session.receiver_anchors();
        let mut state = Self {
            session,
            tools: ToolManager::new(&options),
            surface,
            canvas: CanvasHost::new(CANVAS_ID),
            ui: UiState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        };
        state.sync_surface_options();
        state
    }

    /// Übernimmt Snap-Radius und Raster aus den Optionen in die Zeichenfläche.
    pub fn sync_surface_options(&mut self) {
        self.surface.snap_radius = self.options.snap_radius;
        self.surface.grid = self.options.active_grid();
    }

    /// Statustext des aktiven Tools (oder Hinweis ohne Tool).
    pub fn status_text(&self) -> &str {
        self.tools
            .active_tool()
            .map_or("Kein Werkzeug aktiv", |tool| tool.status_text())
    }

    /// Läuft gerade eine Geste?
    pub fn is_drawing(&self) -> bool {
        self.tools.active_tool().is_some_and(|tool| tool.is_drawing())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
