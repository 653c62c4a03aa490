//! Baut die read-only Render-Szene aus dem AppState.

use super::AppState;
use crate::shared::RenderScene;

/// Erstellt die Szene für einen Frame.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene<'_> {
    RenderScene {
        canvas: &state.canvas,
        markers: &state.markers,
        options: &state.options,
        viewport_size,
    }
}
