//! Trait-basiertes Werkzeug-System für die Zeichenfläche.
//!
//! Jedes Tool implementiert `SurfaceTool`, wird an genau eine Host-Komponente
//! gebunden und erhält deren Maus-/Tastatur-Events als `ToolEvent`.
//! Gesten erzeugen reine Daten (`RenderedGesture`), die Mutation der Session
//! erfolgt zentral in `apply_rendered_gesture`.

/// Bézier-Tool (kubisch, 4 Kontrollpunkte).
pub mod bezier;
/// Kreisbogen-Tool durch Start, Scheitel und Ende.
pub mod arc;
mod error;
/// Gesten-Zustandsautomat und Geschwindigkeits-Geometrie.
pub mod geom;
/// Gerade-Linie-Tool.
pub mod line;
/// SurfaceTool-Trait und Acquire/Dismiss-Bindung.
mod surface_tool;

pub use error::ToolError;
pub use surface_tool::{SurfaceTool, ToolBinding};

use crate::core::{GeomPath, Rect};
use crate::shared::SurfaceOptions;
use glam::{Affine2, Vec2};

// ── Host-Vertrag ─────────────────────────────────────────────────

/// Identität einer Host-Komponente (Zeichenfläche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

/// Gedrückte Modifier-Tasten zum Zeitpunkt eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
        alt: false,
    };
}

/// Für Tools relevante Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

/// Eingabe-Event der Host-Komponente, Positionen in Screen-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolEvent {
    /// Maustaste gedrückt; `click_count` = 2 bei Doppelklick
    Pressed {
        pos: Vec2,
        click_count: u32,
        modifiers: Modifiers,
    },
    /// Mausbewegung mit gedrückter Taste
    Dragged { pos: Vec2, modifiers: Modifiers },
    /// Mausbewegung ohne gedrückte Taste
    Moved { pos: Vec2, modifiers: Modifiers },
    /// Maustaste losgelassen
    Released { pos: Vec2, modifiers: Modifiers },
    /// Taste gedrückt
    KeyPressed { key: Key, modifiers: Modifiers },
}

impl ToolEvent {
    /// Einfacher Klick ohne Modifier.
    pub fn press(pos: Vec2) -> Self {
        ToolEvent::Pressed {
            pos,
            click_count: 1,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn double_press(pos: Vec2) -> Self {
        ToolEvent::Pressed {
            pos,
            click_count: 2,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn drag(pos: Vec2) -> Self {
        ToolEvent::Dragged {
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn motion(pos: Vec2) -> Self {
        ToolEvent::Moved {
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn release(pos: Vec2) -> Self {
        ToolEvent::Released {
            pos,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key(key: Key) -> Self {
        ToolEvent::KeyPressed {
            key,
            modifiers: Modifiers::NONE,
        }
    }
}

/// Gültigkeitsbereich einer Tastenbindung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Nur wenn die Komponente selbst den Fokus hat
    WhenFocused,
    /// Wenn das Fenster der Komponente den Fokus hat
    WhenInFocusedWindow,
}

/// Tastenbindung, die ein Tool beim Acquire auf der Komponente installiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub scope: KeyScope,
}

/// Listener-Registrierung eines Tools auf seiner Host-Komponente.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBindings {
    /// Press/Release-Events
    pub pointer: bool,
    /// Drag/Move-Events
    pub motion: bool,
    pub keys: Vec<KeyBinding>,
}

impl InputBindings {
    /// Maus- und Bewegungs-Listener plus Escape als Abbruch-Taste.
    pub fn pointer_with_cancel() -> Self {
        Self {
            pointer: true,
            motion: true,
            keys: vec![KeyBinding {
                key: Key::Escape,
                scope: KeyScope::WhenInFocusedWindow,
            }],
        }
    }

    /// Prüft, ob ein Event von dieser Registrierung abgedeckt ist.
    ///
    /// Enter wird immer durchgereicht (Gesten-Abschluss), andere Tasten nur
    /// wenn sie gebunden sind.
    pub fn accepts(&self, event: &ToolEvent) -> bool {
        match event {
            ToolEvent::Pressed { .. } | ToolEvent::Released { .. } => self.pointer,
            ToolEvent::Dragged { .. } | ToolEvent::Moved { .. } => self.motion,
            ToolEvent::KeyPressed { key: Key::Enter, .. } => self.pointer,
            ToolEvent::KeyPressed { key, .. } => self.keys.iter().any(|b| b.key == *key),
        }
    }
}

/// Host-Komponente, an die ein Tool gebunden wird.
pub trait ToolHost {
    /// Identität der Komponente
    fn component_id(&self) -> ComponentId;

    /// Installiert die Listener und Tastenbindungen eines Tools.
    fn install_bindings(&mut self, bindings: InputBindings);

    /// Entfernt alle Listener eines Tools.
    fn remove_bindings(&mut self);

    /// Fordert ein Neuzeichnen des Bereichs (Screen-Pixel) an.
    fn repaint(&mut self, area: Rect);
}

/// Zeichenschnittstelle für transiente Tool-Overlays.
///
/// Tools dürfen Strich und Füllung frei ändern, müssen aber eine geänderte
/// Transformation selbst wiederherstellen.
pub trait OverlayPainter {
    fn set_stroke(&mut self, width: f32, color: [f32; 4]);
    fn set_fill(&mut self, color: [f32; 4]);
    fn stroke_path(&mut self, path: &GeomPath);
    fn fill_path(&mut self, path: &GeomPath);
    fn transform(&self) -> Affine2;
    fn set_transform(&mut self, transform: Affine2);
}

// ── Ergebnis ─────────────────────────────────────────────────────

/// Ergebnis einer abgeschlossenen Geste: reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGesture {
    /// Name des erzeugenden Tools
    pub tool: String,
    /// Kontrollpunkte (virtueller Raum) zum Zeitpunkt des Abschlusses
    pub ctrl_points: Vec<Vec2>,
    /// Start-/Stop-Geschwindigkeit der Zeitverzerrung
    pub velocity: geom::VelocityProfile,
    /// Abgetastete Positionen (virtueller Raum), zeitlich verzerrt
    pub frames: Vec<Vec2>,
}

// ── ToolManager ──────────────────────────────────────────────────

/// Verwaltet registrierte Oberflächen-Tools und den aktiven Tool-Index.
pub struct ToolManager {
    tools: Vec<Box<dyn SurfaceTool>>,
    active_index: Option<usize>,
}

impl ToolManager {
    /// Erstellt einen ToolManager mit den Standard-Tools (Linie, Bézier, Bogen).
    pub fn new(options: &SurfaceOptions) -> Self {
        let mut manager = Self {
            tools: Vec::new(),
            active_index: None,
        };
        manager.register(Box::new(line::line_tool(options)));
        manager.register(Box::new(bezier::bezier_tool(options)));
        manager.register(Box::new(arc::arc_tool(options)));
        manager
    }

    /// Leerer Manager ohne Tools.
    pub fn empty() -> Self {
        Self {
            tools: Vec::new(),
            active_index: None,
        }
    }

    /// Registriert ein neues Tool.
    pub fn register(&mut self, tool: Box<dyn SurfaceTool>) {
        self.tools.push(tool);
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Aktiviert ein Tool: das alte wird von der Komponente gelöst, das neue gebunden.
    pub fn set_active(&mut self, index: usize, host: &mut dyn ToolHost) -> Result<(), ToolError> {
        if index >= self.tools.len() || self.active_index == Some(index) {
            return Ok(());
        }
        self.deactivate(host)?;
        self.tools[index].acquire(Some(&mut *host))?;
        self.active_index = Some(index);
        log::debug!("Tool aktiv: {}", self.tools[index].name());
        Ok(())
    }

    /// Löst das aktive Tool von der Komponente (bricht laufende Gesten ab).
    pub fn deactivate(&mut self, host: &mut dyn ToolHost) -> Result<(), ToolError> {
        if let Some(old) = self.active_index.take() {
            self.tools[old].dismiss(host)?;
        }
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_tool(&self) -> Option<&dyn SurfaceTool> {
        self.active_index.map(|i| self.tools[i].as_ref())
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut (dyn SurfaceTool + 'static)> {
        let i = self.active_index?;
        Some(self.tools[i].as_mut())
    }

    /// Reicht geänderte Optionen an alle Tools weiter.
    pub fn apply_options(&mut self, options: &SurfaceOptions) {
        for tool in &mut self.tools {
            tool.apply_options(options);
        }
    }
}
