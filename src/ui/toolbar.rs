//! Toolbar mit Audio-Schalter und Optionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let audio_label = if state.options.audio_enabled {
                "🔊 Audio (M)"
            } else {
                "🔇 Audio (M)"
            };
            if ui
                .add(egui::Button::new(audio_label).selected(state.options.audio_enabled))
                .clicked()
            {
                events.push(AppIntent::AudioToggleRequested);
            }

            if ui.button("Optionen…").clicked() {
                events.push(AppIntent::OpenOptionsDialogRequested);
            }

            ui.separator();
            ui.label(format!("Slider: {}", state.slider_count()));
            ui.separator();
            ui.label("Vier Klicks setzen eine Kurve.");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
