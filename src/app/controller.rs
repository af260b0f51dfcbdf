//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anwendung & Dialoge ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,

            // === Zeichenfläche ===
            AppCommand::SetCanvasBounds { origin, size } => {
                handlers::view::set_canvas_bounds(state, origin, size)
            }

            // === Gesten-Tools ===
            AppCommand::SelectTool { index } => handlers::tool::select(state, index)?,
            AppCommand::DeactivateTool => handlers::tool::deactivate(state)?,
            AppCommand::RouteToolEvent { event } => handlers::tool::route_event(state, event),
            AppCommand::ApplyRenderedGestures => handlers::tool::apply_rendered(state)?,

            // === Session ===
            AppCommand::SelectTransmitter { index } => {
                handlers::session::select_transmitter(state, index)
            }
            AppCommand::SetTimelineSelection { range } => {
                handlers::session::set_timeline_selection(state, range)
            }
        }

        Ok(())
    }
}
