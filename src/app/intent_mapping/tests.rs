use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::CurveColor;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn canvas_click_maps_to_add_control_point() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            position: Vec2::new(3.0, 4.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::AddControlPoint { position } if position == Vec2::new(3.0, 4.0)
    ));
}

#[test]
fn audio_toggle_inverts_current_flag() {
    let mut state = AppState::new();

    state.options.audio_enabled = true;
    let commands = map_intent_to_commands(&state, AppIntent::AudioToggleRequested);
    assert!(matches!(
        commands[0],
        AppCommand::SetAudioEnabled { enabled: false }
    ));

    state.options.audio_enabled = false;
    let commands = map_intent_to_commands(&state, AppIntent::AudioToggleRequested);
    assert!(matches!(
        commands[0],
        AppCommand::SetAudioEnabled { enabled: true }
    ));
}

#[test]
fn submitted_points_keep_their_color() {
    let state = AppState::new();
    let color = CurveColor::rgb(0x5b, 0x8d, 0xee);
    let points = [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE];

    let commands = map_intent_to_commands(&state, AppIntent::CurveSubmitted { points, color });

    match &commands[..] {
        [AppCommand::CreateCurve { curve, color: c }] => {
            assert_eq!(curve.points(), &points);
            assert_eq!(*c, color);
        }
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert!(matches!(commands[..], [AppCommand::RequestExit]));
}
