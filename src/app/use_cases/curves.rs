//! Use-Cases für das Anlegen von Kurven (Klick-Stapel und direkte Übergabe).

use crate::app::pending::PendingCurve;
use crate::app::AppState;
use crate::core::{CubicBezier, CurveColor, MarkerId};
use rand::seq::SliceRandom;

/// Fallback, falls die Palette leer ist.
const FALLBACK_COLOR: CurveColor = CurveColor::rgb(0xff, 0xff, 0xff);

/// Wählt eine zufällige Palettenfarbe für einen neuen Klick-Stapel.
fn random_palette_color(state: &AppState) -> CurveColor {
    state
        .palette
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

/// Fügt einen Klickpunkt hinzu und zeichnet ihn als Punkt.
///
/// Der erste Klick eines Stapels legt die Farbe fest. Beim vierten Klick
/// wird die Kurve erzeugt und der Stapel geleert.
pub fn add_control_point(state: &mut AppState, position: glam::Vec2) -> Option<MarkerId> {
    if state.pending.is_none() {
        let color = random_palette_color(state);
        state.pending = Some(PendingCurve::new(color));
    }
    let pending = state.pending.as_mut()?;
    let color = pending.color();
    let completed = pending.push(position);
    state.canvas.add_dot(position, color);

    log::debug!(
        "Klickpunkt ({:.1}, {:.1}) → {}/4",
        position.x,
        position.y,
        state.pending_click_count()
    );

    let curve = completed?;
    state.pending = None;
    Some(create_curve(state, curve, color))
}

/// Zeichnet die Kurve einmalig und registriert einen Slider mit Marker.
pub fn create_curve(state: &mut AppState, curve: CubicBezier, color: CurveColor) -> MarkerId {
    state.canvas.add_curve(curve, color);
    let id = state.driver.register(curve, color, &mut state.markers);

    log::info!(
        "Kurve {} erstellt ({}), {} aktiv",
        id,
        color,
        state.driver.len()
    );
    id
}

/// Erzeugt eine Demo-Kurve inklusive ihrer vier Kontrollpunkte.
pub fn create_demo_curve(state: &mut AppState, curve: CubicBezier, color: CurveColor) -> MarkerId {
    for point in curve.points() {
        state.canvas.add_dot(*point, color);
    }
    create_curve(state, curve, color)
}
