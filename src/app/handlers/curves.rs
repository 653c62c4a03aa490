//! Handler für Kurven-Erzeugung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CubicBezier, CurveColor};

/// Klickpunkt hinzufügen; der vierte Punkt erzeugt eine Kurve.
pub fn add_control_point(state: &mut AppState, position: glam::Vec2) {
    use_cases::curves::add_control_point(state, position);
}

/// Kurve mit expliziter Farbe erzeugen.
pub fn create(state: &mut AppState, curve: CubicBezier, color: CurveColor) {
    use_cases::curves::create_curve(state, curve, color);
}
