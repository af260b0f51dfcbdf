//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let tool_name = state.tools.active_tool().map_or("Keins", |t| t.name());
            ui.label(format!("Tool: {}", tool_name));
            ui.separator();
            ui.label(state.status_text());

            ui.separator();

            let timeline = &state.session.timeline;
            match &timeline.selection {
                Some(range) => ui.label(format!(
                    "Auswahl: {}..{} ({:.2} s)",
                    range.start,
                    range.end,
                    timeline.selection_seconds()
                )),
                None => ui.label("Auswahl: keine"),
            };

            if let Some(range) = &state.ui.last_written {
                ui.separator();
                ui.label(format!("Geschrieben: {}..{}", range.start, range.end));
            }

            // Statusnachricht (z.B. Fehler beim Anwenden einer Geste)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Commands: {}", state.command_log.len()));
            });
        });
    });
}
