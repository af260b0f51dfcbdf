//! Meloncillo Surface.
//!
//! Zeichenfläche mit Gesten-Werkzeugen, die Transmitter-Trajektorien in die
//! Zeitauswahl der Timeline schreiben.

use eframe::egui;
use meloncillo_surface::{ui, AppController, AppIntent, AppState, SurfaceOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Meloncillo Surface v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Meloncillo Surface"),
            ..Default::default()
        };

        eframe::run_native(
            "Meloncillo Surface",
            options,
            Box::new(|_cc| Ok(Box::new(SurfaceApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SurfaceApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SurfaceApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SurfaceOptions::config_path();
        let surface_options = SurfaceOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(surface_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl SurfaceApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_timeline(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(ui::render_canvas(ui, &self.state, &mut self.input));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Neuzeichnen nur bei Events oder von Tools angeforderten Bereichen.
    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let dirty = self.state.canvas.take_dirty();
        if has_meaningful_events || !dirty.is_empty() || self.state.ui.show_options_dialog {
            ctx.request_repaint();
        }
    }
}
