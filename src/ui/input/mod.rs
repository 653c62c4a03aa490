//! Zeichenflächen-Input: Mausklicks und Tastatur → AppIntent.

mod clicks;
mod keyboard;

use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für die Zeichenfläche.
///
/// Hält den zuletzt gemeldeten Viewport, damit `ViewportResized`
/// nur bei tatsächlicher Größenänderung ausgelöst wird.
#[derive(Debug, Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt alle Zeichenflächen-Events eines Frames.
    ///
    /// `response` muss von einem `allocate_exact_size(.., Sense::click())` stammen;
    /// Klick-Positionen werden relativ zu `response.rect.min` gemeldet.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let size = [response.rect.width(), response.rect.height()];
        if self.last_viewport_size != Some(size) {
            self.last_viewport_size = Some(size);
            events.push(AppIntent::ViewportResized { size });
        }

        self.handle_clicks(response, &mut events);
        events.extend(keyboard::collect_keyboard_intents(ui));

        events
    }
}

/// Rechnet eine Bildschirmposition in Zeichenflächen-Pixel um.
fn screen_pos_to_canvas(pos: egui::Pos2, response: &egui::Response) -> glam::Vec2 {
    let local = pos - response.rect.min;
    glam::Vec2::new(local.x, local.y)
}
