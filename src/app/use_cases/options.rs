//! Use-Cases für Laufzeit-Optionen und Audio-Schalter.

use crate::app::AppState;
use crate::shared::CurveOptions;
use anyhow::Context;

/// Übernimmt geänderte Optionen.
///
/// Die Schrittweite gilt für neu erzeugte Kurven; bestehende Slider behalten
/// ihre eigene. Ungültige Palette oder Schrittweite wird abgelehnt, der State bleibt unverändert.
pub fn apply(state: &mut AppState, options: CurveOptions) -> anyhow::Result<()> {
    let palette = options.validate().context("Optionen nicht übernommen")?;

    state.driver.set_default_step(options.step);
    state.clock.reconfigure(
        options.tick_mode,
        options.tick_interval(),
        options.max_ticks_per_frame,
    );
    state.cue.set_volume(options.audio_volume);
    state.palette = palette;
    state.options = options;
    Ok(())
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    apply(state, CurveOptions::default())
}

/// Schaltet den Umkehrpunkt-Klick.
pub fn set_audio_enabled(state: &mut AppState, enabled: bool) {
    state.options.audio_enabled = enabled;
    if enabled && state.cue.is_silent() {
        log::warn!("Audio aktiviert, aber kein Ausgabegerät verfügbar");
    }
    log::info!("Audio-Klick {}", if enabled { "an" } else { "aus" });
}

/// Schreibt die Optionen nach `path`.
pub fn save(state: &AppState, path: &std::path::Path) -> anyhow::Result<()> {
    state
        .options
        .save_to_file(path)
        .with_context(|| format!("Optionen konnten nicht gespeichert werden: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurveColor;
    use crate::shared::TickMode;
    use glam::Vec2;

    #[test]
    fn apply_updates_default_step_but_keeps_existing_sliders() {
        let mut state = AppState::new();
        let curve = crate::core::CubicBezier::new(Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE);
        let old = crate::app::use_cases::curves::create_curve(
            &mut state,
            curve,
            CurveColor::rgb(0, 0, 0),
        );

        let mut options = state.options.clone();
        options.step = 0.05;
        options.tick_mode = TickMode::PerFrame;
        apply(&mut state, options).unwrap();

        assert_eq!(state.driver.default_step(), 0.05);
        assert_eq!(state.driver.slider(old).unwrap().step(), 0.00125);
        assert_eq!(state.clock.mode(), TickMode::PerFrame);
    }

    #[test]
    fn apply_rejects_invalid_palette() {
        let mut state = AppState::new();
        let mut options = state.options.clone();
        options.palette = vec!["nope".to_string()];
        options.step = 0.5;

        assert!(apply(&mut state, options).is_err());
        assert_eq!(state.options.step, 0.00125);
        assert_eq!(state.palette.len(), 7);
    }

    #[test]
    fn apply_rejects_infinite_tick_interval() {
        let mut state = AppState::new();
        let mut options = state.options.clone();
        options.tick_interval_ms = f32::INFINITY;

        assert!(apply(&mut state, options).is_err());
        assert_eq!(state.options.tick_interval_ms, 4.0);
    }

    #[test]
    fn apply_replaces_palette() {
        let mut state = AppState::new();
        let mut options = state.options.clone();
        options.palette = vec!["#010203".to_string()];

        apply(&mut state, options).unwrap();

        assert_eq!(state.palette, vec![CurveColor::rgb(1, 2, 3)]);
    }

    #[test]
    fn save_to_unwritable_path_fails_with_context() {
        let state = AppState::new();
        let err = save(&state, std::path::Path::new("/nonexistent/dir/curves.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("nicht gespeichert"));
    }
}
