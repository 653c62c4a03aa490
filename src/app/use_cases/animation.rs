//! Use-Case: ein Frame der Animation (Demo-Zeitplan + fällige Driver-Ticks).

use super::curves;
use crate::app::animation::TickReport;
use crate::app::AppState;
use crate::shared::{BoundaryCue, SilentCue};
use std::time::Instant;

/// Erzeugt fällige Demo-Kurven und führt alle fälligen Ticks aus.
///
/// Ohne Slider läuft die Uhr nicht: Leerlauf vor der ersten Kurve wird nicht
/// als Rückstand nachgeholt, der erste Slider startet bei `t = 0`.
pub fn advance(state: &mut AppState, now: Instant) -> TickReport {
    spawn_due_demo_curves(state, now);

    if state.driver.is_empty() {
        state.clock.reset();
        state.stats.last_frame_ticks = 0;
        return TickReport::default();
    }

    let ticks = state.clock.ticks_due(now);
    let report = run_ticks(state, ticks);

    state.stats.last_frame_ticks = ticks;
    state.stats.ticks_total += ticks as u64;
    state.stats.crossings_total += report.crossings as u64;
    report
}

/// Führt genau `ticks` Driver-Ticks aus; Klicks nur bei aktiviertem Audio.
pub fn run_ticks(state: &mut AppState, ticks: u32) -> TickReport {
    let mut silent = SilentCue;
    let cue: &mut dyn BoundaryCue = if state.options.audio_enabled {
        state.cue.as_mut()
    } else {
        &mut silent
    };

    let mut total = TickReport::default();
    for _ in 0..ticks {
        let report = state.driver.tick(&mut state.markers, cue);
        total.advanced += report.advanced;
        total.crossings += report.crossings;
    }
    total
}

fn spawn_due_demo_curves(state: &mut AppState, now: Instant) {
    if !state.view.has_viewport() {
        return;
    }
    let viewport = state.view.viewport_size;
    let Some(demo) = state.demo.as_mut() else {
        return;
    };
    let due = demo.take_due(now, viewport);
    if demo.is_finished() {
        state.demo = None;
        log::debug!("Demo abgeschlossen");
    }
    for entry in due {
        curves::create_demo_curve(state, entry.curve, entry.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CubicBezier, CurveColor, Direction};
    use crate::shared::{CurveOptions, TickMode};
    use glam::Vec2;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    const DEFAULT_TEST_STEP: f32 = 0.00125;

    /// Zählt `play()`-Aufrufe über einen geteilten Zähler.
    struct CountingCue(Rc<Cell<usize>>);

    impl BoundaryCue for CountingCue {
        fn play(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn state_with_step(step: f32) -> AppState {
        let mut options = CurveOptions::default();
        options.step = step;
        options.demo_enabled = false;
        options.audio_enabled = false;
        AppState::with_options(options)
    }

    fn arch() -> CubicBezier {
        CubicBezier::new(Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE)
    }

    fn with_counting_cue(state: &mut AppState) -> Rc<Cell<usize>> {
        let plays = Rc::new(Cell::new(0));
        state.cue = Box::new(CountingCue(plays.clone()));
        plays
    }

    #[test]
    fn run_ticks_moves_markers_and_counts_crossings() {
        let mut state = state_with_step(0.1);
        let id = curves::create_curve(&mut state, arch(), CurveColor::rgb(1, 2, 3));

        let report = run_ticks(&mut state, 10);

        assert_eq!(report.advanced, 10);
        assert_eq!(report.crossings, 1);
        assert_eq!(state.driver.slider(id).unwrap().direction(), Direction::Reverse);
        assert!(state.markers.get(id).unwrap().center.is_some());
    }

    #[test]
    fn enabled_audio_plays_once_per_crossing() {
        let mut state = state_with_step(0.1);
        state.options.audio_enabled = true;
        let plays = with_counting_cue(&mut state);
        curves::create_curve(&mut state, arch(), CurveColor::rgb(1, 2, 3));

        let report = run_ticks(&mut state, 20);

        assert_eq!(report.crossings, 2);
        assert_eq!(plays.get(), 2);
    }

    #[test]
    fn disabled_audio_never_plays() {
        let mut state = state_with_step(0.1);
        let plays = with_counting_cue(&mut state);
        curves::create_curve(&mut state, arch(), CurveColor::rgb(1, 2, 3));

        let report = run_ticks(&mut state, 20);

        assert_eq!(report.crossings, 2);
        assert_eq!(plays.get(), 0);
    }

    #[test]
    fn idle_time_before_first_curve_is_not_caught_up() {
        let mut state = state_with_step(DEFAULT_TEST_STEP);
        let start = Instant::now();
        advance(&mut state, start);

        for (x, y) in [(0.0, 0.0), (10.0, 40.0), (30.0, 40.0), (40.0, 0.0)] {
            curves::add_control_point(&mut state, Vec2::new(x, y));
        }
        let id = state.driver.sliders()[0].marker_id();

        advance(&mut state, start + Duration::from_secs(10));

        assert_eq!(state.stats.last_frame_ticks, 1);
        assert_eq!(state.driver.slider(id).unwrap().t(), DEFAULT_TEST_STEP);
        assert_eq!(state.markers.get(id).unwrap().center, Some(Vec2::ZERO));
    }

    #[test]
    fn demo_starts_with_first_known_viewport() {
        let mut options = CurveOptions::default();
        options.audio_enabled = false;
        let start = Instant::now();
        let mut state = AppState::with_options(options);

        advance(&mut state, start + Duration::from_secs(1));
        assert_eq!(state.slider_count(), 0);

        // Erster Frame mit Viewport nach langer Wartezeit: nur Kurve 0
        state.view.viewport_size = [1280.0, 720.0];
        advance(&mut state, start + Duration::from_secs(1));
        assert_eq!(state.slider_count(), 1);

        advance(&mut state, start + Duration::from_secs(2));

        assert_eq!(state.slider_count(), 7);
        assert_eq!(state.canvas.dots().len(), 28);
        assert!(state.demo.is_none());
        for (curve, color) in state.canvas.curves().iter().zip(state.palette.iter()) {
            assert_eq!(curve.color, *color);
        }
    }

    #[test]
    fn advance_in_per_frame_mode_ticks_once() {
        let mut options = CurveOptions::default();
        options.demo_enabled = false;
        options.tick_mode = TickMode::PerFrame;
        let mut state = AppState::with_options(options);
        curves::create_curve(&mut state, arch(), CurveColor::rgb(1, 2, 3));

        let now = Instant::now();
        advance(&mut state, now);
        advance(&mut state, now + Duration::from_secs(1));

        assert_eq!(state.stats.ticks_total, 2);
        assert_eq!(state.stats.last_frame_ticks, 1);
    }

    #[test]
    fn empty_driver_does_not_tick() {
        let mut state = state_with_step(0.1);
        let now = Instant::now();

        let report = advance(&mut state, now);

        assert_eq!(report, TickReport::default());
        assert_eq!(state.stats.ticks_total, 0);
    }
}
