//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::SelectToolRequested { index } => vec![AppCommand::SelectTool { index }],
        AppIntent::DeselectToolRequested => vec![AppCommand::DeactivateTool],
        AppIntent::CanvasResized { origin, size } => {
            vec![AppCommand::SetCanvasBounds { origin, size }]
        }
        AppIntent::CanvasInput { event } => {
            // Events, die die Komponente nicht abonniert hat, erreichen kein Tool
            if !state.canvas.accepts(&event) {
                return Vec::new();
            }
            vec![
                AppCommand::RouteToolEvent { event },
                AppCommand::ApplyRenderedGestures,
            ]
        }
        AppIntent::TransmitterSelected { index } => vec![AppCommand::SelectTransmitter { index }],
        AppIntent::TimelineSelectionChanged { start, end } => {
            vec![AppCommand::SetTimelineSelection { range: start..end }]
        }
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
