//! Zustände des Gesten-Automaten und gestenbezogene Daten.

use super::velocity::{VelocityProfile, VelocitySamples};
use crate::core::{GeomPath, Rect};
use glam::Vec2;

/// Zustand des Gesten-Automaten. Genau einer ist aktiv; nur die Handler des
/// Tools wechseln ihn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Keine Geste
    #[default]
    None,
    /// Maus gedrückt, Drag-Schwelle noch nicht überschritten
    Init,
    /// Initialer Drag: Start- und Endpunkt werden aufgezogen
    InitDrag,
    /// Kontrollpunkte editierbar
    Ctrl,
    /// Ein Kontrollpunkt wird gezogen
    CtrlDrag,
    /// Rotation (nicht implementiert, wird nie betreten)
    Rotate,
    /// Geschwindigkeits-Punkte editierbar
    Velocity,
    /// Ein Geschwindigkeits-Punkt wird gezogen
    VeloDrag,
}

impl DragState {
    /// Sind die Kontrollpunkte vollständig (Handles sichtbar)?
    pub fn shows_ctrl_points(self) -> bool {
        matches!(
            self,
            DragState::Ctrl | DragState::CtrlDrag | DragState::Velocity | DragState::VeloDrag
        )
    }

    /// Ist die Geschwindigkeits-Bearbeitung aktiv?
    pub fn shows_velocity(self) -> bool {
        matches!(self, DragState::Velocity | DragState::VeloDrag)
    }

    /// Kann eine Geste aus diesem Zustand gerendert werden?
    pub fn can_render(self) -> bool {
        matches!(self, DragState::Ctrl | DragState::Velocity)
    }
}

/// Geschwindigkeits-Bearbeitung: existiert nur in Velocity/VeloDrag.
#[derive(Debug, Clone)]
pub(crate) struct VelocityEdit {
    pub samples: VelocitySamples,
    /// Start links/rechts, Ende links/rechts (virtueller Raum)
    pub ctrl_points: [Vec2; 4],
    pub shape: GeomPath,
}

/// Daten einer laufenden Geste, von Press bis `finish_gesture`.
#[derive(Debug, Clone)]
pub(crate) struct Gesture {
    /// Kontrollpunkte im virtuellen Raum, Größe fest ab Gestenstart
    pub ctrl_points: Vec<Vec2>,
    /// Press-Position in Screen-Pixeln (Drag-Schwelle)
    pub press_screen: Vec2,
    /// Index des gezogenen (Geschwindigkeits-)Kontrollpunkts
    pub drag_index: usize,
    /// Verkettung: Endpunkt folgt der Maus ohne gedrückte Taste
    pub concatenating: bool,
    pub basic_shape: GeomPath,
    pub controlled_shape: GeomPath,
    /// Kontrollpunkt-Handles in Screen-Pixeln
    pub ctrl_points_shape: GeomPath,
    pub velocity: Option<VelocityEdit>,
    pub profile: VelocityProfile,
    /// Zuletzt gemeldeter Repaint-Bereich (Screen-Pixel)
    pub repaint_bounds: Option<Rect>,
}

impl Gesture {
    /// Neue Geste mit allen Kontrollpunkten auf `start`.
    pub fn new(num_ctrl_points: usize, start: Vec2, press_screen: Vec2) -> Self {
        Self::from_points(vec![start; num_ctrl_points], press_screen)
    }

    pub fn from_points(ctrl_points: Vec<Vec2>, press_screen: Vec2) -> Self {
        Self {
            ctrl_points,
            press_screen,
            drag_index: 0,
            concatenating: false,
            basic_shape: GeomPath::new(),
            controlled_shape: GeomPath::new(),
            ctrl_points_shape: GeomPath::new(),
            velocity: None,
            profile: VelocityProfile::UNIFORM,
            repaint_bounds: None,
        }
    }
}
