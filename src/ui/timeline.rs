//! Timeline-Panel: Zeitauswahl, in die Gesten geschrieben werden.

use crate::app::{AppIntent, AppState};

/// Rendert das Timeline-Panel und gibt erzeugte Events zurück.
pub fn render_timeline(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let timeline = &state.session.timeline;
    let length = timeline.length_frames;
    let (mut start, mut end) = timeline
        .selection
        .as_ref()
        .map_or((0, length), |r| (r.start, r.end));

    egui::TopBottomPanel::bottom("timeline").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Timeline ({:.0} fps):", timeline.rate));

            let mut changed = false;
            ui.label("Start");
            changed |= ui
                .add(egui::DragValue::new(&mut start).range(0..=length).speed(1.0))
                .changed();
            ui.label("Ende");
            changed |= ui
                .add(egui::DragValue::new(&mut end).range(0..=length).speed(1.0))
                .changed();

            if ui.button("Alles").clicked() {
                start = 0;
                end = length;
                changed = true;
            }

            if changed {
                // Start nie hinter dem Ende
                start = start.min(end);
                events.push(AppIntent::TimelineSelectionChanged { start, end });
            }

            if timeline.rate > 0.0 {
                ui.separator();
                ui.label(format!(
                    "{:.2} s … {:.2} s",
                    start as f32 / timeline.rate,
                    end as f32 / timeline.rate
                ));
            }
        });
    });

    events
}
