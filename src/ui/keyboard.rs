//! Globale Tastenkürzel: Werkzeugwahl und Beenden.
//!
//! Enter und Escape gehören während einer Geste dem gebundenen Tool und
//! laufen über `input`, nicht über dieses Modul.

use crate::app::AppIntent;

/// Zifferntasten 1..5 wählen das Tool mit dem entsprechenden Index.
const TOOL_KEYS: [egui::Key; 5] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
];

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    tool_count: usize,
    is_drawing: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_q_pressed, key_escape_pressed, key_0_pressed, pressed_tool) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::Q),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Num0),
                TOOL_KEYS
                    .iter()
                    .take(tool_count)
                    .position(|key| i.key_pressed(*key)),
            )
        });

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    // Laufende Geste: Werkzeugwechsel würde sie verwerfen
    if is_drawing || modifiers.command {
        return events;
    }

    // Escape im Leerlauf löst das Werkzeug
    if key_escape_pressed || key_0_pressed {
        events.push(AppIntent::DeselectToolRequested);
    }
    if let Some(index) = pressed_tool {
        events.push(AppIntent::SelectToolRequested { index });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key_event(
        key: egui::Key,
        modifiers: egui::Modifiers,
        is_drawing: bool,
    ) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.modifiers = modifiers;
        raw_input.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        });

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui, 3, is_drawing);
            });
        });

        events
    }

    #[test]
    fn test_num2_selects_second_tool() {
        let events = collect_with_key_event(egui::Key::Num2, egui::Modifiers::default(), false);
        assert!(events
            .iter()
            .any(|e| matches!(e, AppIntent::SelectToolRequested { index: 1 })));
    }

    #[test]
    fn test_num_beyond_tool_count_ignored() {
        let events = collect_with_key_event(egui::Key::Num5, egui::Modifiers::default(), false);
        assert!(events.is_empty(), "Unerwartete Intents: {events:?}");
    }

    #[test]
    fn test_tool_keys_blocked_while_drawing() {
        let events = collect_with_key_event(egui::Key::Num1, egui::Modifiers::default(), true);
        assert!(events.is_empty(), "Unerwartete Intents: {events:?}");
    }

    #[test]
    fn test_ctrl_q_requests_exit() {
        let events = collect_with_key_event(egui::Key::Q, egui::Modifiers::COMMAND, true);
        assert!(events.iter().any(|e| matches!(e, AppIntent::ExitRequested)));
    }

    #[test]
    fn test_escape_during_gesture_left_to_tool() {
        let drawing = collect_with_key_event(egui::Key::Escape, egui::Modifiers::default(), true);
        assert!(drawing.is_empty());

        let idle = collect_with_key_event(egui::Key::Escape, egui::Modifiers::default(), false);
        assert!(idle
            .iter()
            .any(|e| matches!(e, AppIntent::DeselectToolRequested)));
    }
}
