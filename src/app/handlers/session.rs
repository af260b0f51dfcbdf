//! Handler für Session-Auswahl (Transmitter, Zeitbereich).

use crate::app::AppState;
use std::ops::Range;

/// Wählt den Transmitter, den Gesten bearbeiten.
pub fn select_transmitter(state: &mut AppState, index: usize) {
    if index >= state.session.transmitters.len() {
        log::warn!("Transmitter {} existiert nicht", index);
        return;
    }
    if state.session.selected_transmitter == Some(index) {
        return;
    }
    state.session.selected_transmitter = Some(index);
}

/// Setzt die Zeitauswahl (wird auf die Timeline begrenzt).
pub fn set_timeline_selection(state: &mut AppState, range: Range<usize>) {
    state.session.timeline.select(range);
    log::debug!(
        "Zeitauswahl: {:?} ({:.2} s)",
        state.session.timeline.selection,
        state.session.timeline.selection_seconds()
    );
}
