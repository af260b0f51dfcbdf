//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::SurfaceOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen, reicht sie an Tools und Zeichenfläche weiter
/// und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: SurfaceOptions) -> anyhow::Result<()> {
    state.options = options;
    state.tools.apply_options(&state.options);
    state.sync_surface_options();
    let path = SurfaceOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, SurfaceOptions::default())
}
