//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

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
        log::trace!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Kurven ===
            AppCommand::AddControlPoint { position } => {
                handlers::curves::add_control_point(state, position)
            }
            AppCommand::CreateCurve { curve, color } => handlers::curves::create(state, curve, color),

            // === Animation & Viewport ===
            AppCommand::SetSliderStep { id, step } => {
                handlers::animation::set_slider_step(state, id, step)
            }
            AppCommand::AdvanceAnimation { now } => handlers::animation::advance(state, now),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Optionen & Audio ===
            AppCommand::SetAudioEnabled { enabled } => {
                handlers::dialog::set_audio_enabled(state, enabled)
            }
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene<'a>(
        &self,
        state: &'a AppState,
        viewport_size: [f32; 2],
    ) -> RenderScene<'a> {
        render_scene::build(state, viewport_size)
    }
}
