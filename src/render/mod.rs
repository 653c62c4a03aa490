//! Zeichnen der Szene mit dem egui-Painter.

mod curve_renderer;
mod marker_renderer;

pub use crate::shared::RenderScene;
pub use curve_renderer::CurveRenderer;
pub use marker_renderer::paint_markers;

/// Haupt-Renderer für die Zeichenfläche.
///
/// Statische Kurven liegen als gecachte Shapes vor; Marker werden pro Frame
/// aus ihren aktuellen Positionen gezeichnet.
#[derive(Default)]
pub struct Renderer {
    curves: CurveRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die komplette Szene in `rect`.
    pub fn render_scene(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        self.curves.sync(scene.canvas, scene.options);
        self.curves.paint(painter, rect.min);
        paint_markers(painter, rect.min, scene.markers, scene.options.marker_size_px);
    }
}
