//! Handler für Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
