//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::CubicBezier;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { position } => vec![AppCommand::AddControlPoint { position }],
        AppIntent::CurveSubmitted { points, color } => vec![AppCommand::CreateCurve {
            curve: CubicBezier::from(points),
            color,
        }],
        AppIntent::SliderStepChangeRequested { id, step } => {
            vec![AppCommand::SetSliderStep { id, step }]
        }
        AppIntent::FrameStarted { now } => vec![AppCommand::AdvanceAnimation { now }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::AudioToggleRequested => vec![AppCommand::SetAudioEnabled {
            enabled: !state.options.audio_enabled,
        }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
