//! Optionen-Dialog für Snapping, Gesten-Darstellung und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Snapping ────────────────────────────────────
                    ui.collapsing("Snapping", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Snap-Radius (virtuell):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.snap_radius)
                                        .range(0.0..=0.2)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        changed |= ui.checkbox(&mut opts.snap_to_grid, "Raster-Snap").changed();
                        ui.horizontal(|ui| {
                            ui.label("Rasterweite:");
                            changed |= ui
                                .add_enabled(
                                    opts.snap_to_grid,
                                    egui::DragValue::new(&mut opts.grid_size)
                                        .range(0.01..=0.5)
                                        .speed(0.005),
                                )
                                .changed();
                        });
                    });

                    // ── Gesten ──────────────────────────────────────
                    ui.collapsing("Gesten", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Frames pro Geste:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.render_frames)
                                        .range(2..=4096)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Handle-Größe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.ctrl_point_size_px)
                                        .range(2.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Repaint-Rand (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.repaint_padding_px)
                                        .range(0.0..=20.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Shape:", &mut opts.shape_color);
                        changed |= color_edit(ui, "Kontrollpunkte:", &mut opts.ctrl_point_color);
                        changed |= color_edit(ui, "Geschwindigkeit:", &mut opts.velocity_color);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::overlay::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [r, g, b, a].map(|v| v as f32 / 255.0);
            changed = true;
        }
    });
    changed
}
