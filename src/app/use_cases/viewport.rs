//! Use-Cases für Viewport-Größe.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
///
/// Bestehende Kurven werden nicht neu berechnet; nur noch ausstehende
/// Demo-Kurven nutzen die neue Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size != size {
        log::debug!("Viewport: {:.0}×{:.0}", size[0], size[1]);
    }
    state.view.viewport_size = size;
}
