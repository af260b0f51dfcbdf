//! Use-Case: Gerenderte Geste in die Trajektorie des gewählten Transmitters schreiben.

use crate::app::tools::RenderedGesture;
use crate::core::Session;
use anyhow::{bail, Context};
use glam::Vec2;
use std::ops::Range;

/// Schreibt `gesture` über die Zeitauswahl der Session.
///
/// Die Frames der Geste werden linear auf die Länge der Auswahl umgetastet.
/// Gibt den tatsächlich geschriebenen Frame-Bereich zurück.
pub fn apply_rendered_gesture(
    session: &mut Session,
    gesture: &RenderedGesture,
) -> anyhow::Result<Range<usize>> {
    if gesture.frames.is_empty() {
        bail!("Geste '{}' enthält keine Frames", gesture.tool);
    }
    let selection = session
        .timeline
        .selection
        .clone()
        .filter(|r| !r.is_empty())
        .context("Keine Zeitauswahl gesetzt")?;
    let transmitter = session
        .selected_transmitter_mut()
        .context("Kein Transmitter ausgewählt")?;

    let positions = resample_frames(&gesture.frames, selection.len());
    let written = transmitter.trajectory.overwrite(selection.clone(), &positions);
    if written.is_empty() {
        bail!(
            "Zeitauswahl {:?} liegt außerhalb der Trajektorie von '{}'",
            selection,
            transmitter.name
        );
    }

    log::info!(
        "Geste '{}' auf '{}' angewendet: Frames {:?}",
        gesture.tool,
        transmitter.name,
        written
    );
    Ok(written)
}

/// Lineare Umtastung von `frames` auf `count` Positionen (Enden bleiben erhalten).
pub fn resample_frames(frames: &[Vec2], count: usize) -> Vec<Vec2> {
    match (frames.len(), count) {
        (_, 0) | (0, _) => Vec::new(),
        (1, _) => vec![frames[0]; count],
        (_, 1) => vec![frames[0]],
        (n, _) => {
            let scale = (n - 1) as f32 / (count - 1) as f32;
            (0..count)
                .map(|i| {
                    let pos = i as f32 * scale;
                    let lo = (pos.floor() as usize).min(n - 1);
                    let hi = (lo + 1).min(n - 1);
                    frames[lo].lerp(frames[hi], pos - lo as f32)
                })
                .collect()
        }
    }
}
