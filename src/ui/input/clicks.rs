//! Klick-Events: jeder Primärklick wird zu einem Kontrollpunkt.

use super::{screen_pos_to_canvas, InputState};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Primärklicks auf der Zeichenfläche.
    pub(super) fn handle_clicks(&mut self, response: &egui::Response, events: &mut Vec<AppIntent>) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasClicked {
                position: screen_pos_to_canvas(pointer_pos, response),
            });
        }
    }
}
