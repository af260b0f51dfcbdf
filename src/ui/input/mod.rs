//! Zeichenflächen-Input: egui-Rohereignisse → `ToolEvent` → `AppIntent`.
//!
//! Liest die Roh-Events statt der `Response`-Auswertung, weil Tools den Press
//! (inkl. Klickzahl) und den Release getrennt sehen müssen.

mod clicks;

use clicks::ClickCounter;

use super::overlay::to_vec2;
use crate::app::tools::{Key, Modifiers};
use crate::app::{AppIntent, ToolEvent};

/// egui-Modifier → Tool-Modifier (Cmd auf macOS zählt als Ctrl).
fn tool_modifiers(modifiers: egui::Modifiers) -> Modifiers {
    Modifiers {
        ctrl: modifiers.command,
        shift: modifiers.shift,
        alt: modifiers.alt,
    }
}

fn tool_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Enter => Some(Key::Enter),
        egui::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Verwaltet den Input-Zustand der Zeichenfläche zwischen Frames.
#[derive(Debug, Default)]
pub struct InputState {
    clicks: ClickCounter,
    /// Primärtaste wurde auf der Zeichenfläche gedrückt und ist noch unten
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Zeichenflächen-Events dieses Frames als `AppIntent`s.
    pub fn collect_canvas_events(
        &mut self,
        input: &egui::InputState,
        canvas: egui::Rect,
        keyboard_free: bool,
    ) -> Vec<AppIntent> {
        self.translate(
            &input.events,
            input.modifiers,
            input.time,
            canvas,
            keyboard_free,
        )
        .into_iter()
        .map(|event| AppIntent::CanvasInput { event })
        .collect()
    }

    /// Übersetzt Roh-Events in Tool-Events.
    ///
    /// Drags und Release werden nach einem Press auf der Fläche auch außerhalb
    /// weitergereicht (Pointer-Capture), Bewegungen ohne Taste nur innerhalb.
    pub(crate) fn translate(
        &mut self,
        events: &[egui::Event],
        modifiers: egui::Modifiers,
        time: f64,
        canvas: egui::Rect,
        keyboard_free: bool,
    ) -> Vec<ToolEvent> {
        let mut out = Vec::new();

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let pos = *pos;
                    let modifiers = tool_modifiers(modifiers);
                    if self.primary_down {
                        out.push(ToolEvent::Dragged {
                            pos: to_vec2(pos),
                            modifiers,
                        });
                    } else if canvas.contains(pos) {
                        out.push(ToolEvent::Moved {
                            pos: to_vec2(pos),
                            modifiers,
                        });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    modifiers,
                } => {
                    let modifiers = tool_modifiers(*modifiers);
                    if *pressed {
                        if !canvas.contains(*pos) {
                            continue;
                        }
                        self.primary_down = true;
                        let click_count = self.clicks.register(to_vec2(*pos), time);
                        out.push(ToolEvent::Pressed {
                            pos: to_vec2(*pos),
                            click_count,
                            modifiers,
                        });
                    } else if self.primary_down {
                        self.primary_down = false;
                        out.push(ToolEvent::Released {
                            pos: to_vec2(*pos),
                            modifiers,
                        });
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } if keyboard_free => {
                    if let Some(key) = tool_key(*key) {
                        out.push(ToolEvent::KeyPressed {
                            key,
                            modifiers: tool_modifiers(*modifiers),
                        });
                    }
                }
                _ => {}
            }
        }

        out
    }
}
