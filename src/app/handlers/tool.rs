//! Handler für Gesten-Tools: Auswahl, Event-Routing und Übernahme.

use crate::app::tools::ToolEvent;
use crate::app::use_cases;
use crate::app::AppState;
use anyhow::Context;

/// Aktiviert ein Tool per Index; das vorherige wird von der Zeichenfläche gelöst.
pub fn select(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    state
        .tools
        .set_active(index, &mut state.canvas)
        .with_context(|| format!("Tool {} konnte nicht aktiviert werden", index))?;
    state.ui.status_message = None;
    Ok(())
}

/// Löst das aktive Tool (bricht laufende Gesten ab).
pub fn deactivate(state: &mut AppState) -> anyhow::Result<()> {
    state
        .tools
        .deactivate(&mut state.canvas)
        .context("Tool konnte nicht gelöst werden")?;
    Ok(())
}

/// Reicht ein Zeichenflächen-Event an das aktive Tool weiter.
pub fn route_event(state: &mut AppState, event: ToolEvent) {
    let AppState {
        tools,
        surface,
        canvas,
        ..
    } = state;
    if let Some(tool) = tools.active_tool_mut() {
        tool.handle_event(&event, &*surface, canvas);
    }
}

/// Übernimmt alle abgeschlossenen Gesten des aktiven Tools in die Session.
pub fn apply_rendered(state: &mut AppState) -> anyhow::Result<()> {
    let rendered = state
        .tools
        .active_tool_mut()
        .map(|tool| tool.take_rendered())
        .unwrap_or_default();

    for gesture in rendered {
        match use_cases::apply_rendered_gesture(&mut state.session, &gesture) {
            Ok(range) => {
                state.ui.status_message = Some(format!(
                    "{}: Frames {}..{} geschrieben",
                    gesture.tool, range.start, range.end
                ));
                state.ui.last_written = Some(range);
            }
            Err(e) => {
                state.ui.status_message = Some(format!("{e:#}"));
                return Err(e.context(format!("Geste '{}' nicht übernommen", gesture.tool)));
            }
        }
    }
    Ok(())
}
