//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::CurveOptions;
use super::scene::{CanvasLayer, MarkerLayer};

/// Read-only Daten für einen Render-Frame.
#[derive(Clone, Copy)]
pub struct RenderScene<'a> {
    /// Statische Kurven und Kontrollpunkte
    pub canvas: &'a CanvasLayer,
    /// Aktuelle Marker-Positionen
    pub markers: &'a MarkerLayer,
    /// Laufzeit-Optionen für Größen und Linienstärken
    pub options: &'a CurveOptions,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene<'_> {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.canvas.curves().is_empty() && self.canvas.dots().is_empty()
    }
}
