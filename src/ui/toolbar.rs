//! Toolbar: Gesten-Werkzeug und Ziel-Transmitter wählen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.tools.active_index();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            if ui
                .add(egui::Button::new("Keins (0)").selected(active.is_none()))
                .clicked()
            {
                events.push(AppIntent::DeselectToolRequested);
            }
            for (index, name) in state.tools.tool_names() {
                let label = format!("{} ({})", name, index + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == Some(index)))
                    .clicked()
                {
                    events.push(AppIntent::SelectToolRequested { index });
                }
            }

            ui.separator();

            ui.label("Transmitter:");
            let session = &state.session;
            let selected_label = session
                .selected_transmitter
                .and_then(|i| session.transmitters.get(i))
                .map_or("Keiner", |t| t.name.as_str());
            let mut selected = session.selected_transmitter;
            egui::ComboBox::from_id_salt("transmitter_select")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    for (index, transmitter) in session.transmitters.iter().enumerate() {
                        ui.selectable_value(&mut selected, Some(index), transmitter.name.as_str());
                    }
                });
            if selected != session.selected_transmitter {
                if let Some(index) = selected {
                    events.push(AppIntent::TransmitterSelected { index });
                }
            }

            ui.separator();

            if ui
                .add(egui::Button::new("Optionen...").selected(state.ui.show_options_dialog))
                .clicked()
            {
                events.push(if state.ui.show_options_dialog {
                    AppIntent::CloseOptionsDialogRequested
                } else {
                    AppIntent::OpenOptionsDialogRequested
                });
            }

            // Laufende Geste
            if state.is_drawing() {
                ui.separator();
                ui.label(state.status_text());
            }
        });
    });

    events
}
