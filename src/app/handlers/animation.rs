//! Handler für den Animations-Takt.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MarkerId;
use std::time::Instant;

/// Führt Demo-Zeitplan und fällige Ticks für einen Frame aus.
pub fn advance(state: &mut AppState, now: Instant) {
    let report = use_cases::animation::advance(state, now);
    if report.crossings > 0 {
        log::trace!("{} Umkehrpunkt(e) in diesem Frame", report.crossings);
    }
}

/// Ändert die Schrittweite eines Sliders; unbekannte IDs werden nur protokolliert.
pub fn set_slider_step(state: &mut AppState, id: MarkerId, step: f32) {
    if !(step.is_finite() && step > 0.0) {
        log::warn!("Schrittweite {} für Slider {} verworfen", step, id);
        return;
    }
    if state.driver.set_step(id, step) {
        log::debug!("Slider {}: step={}", id, step);
    } else {
        log::warn!("Slider {} unbekannt, Schrittweite nicht geändert", id);
    }
}
