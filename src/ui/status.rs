//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::shared::TickMode;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Slider: {} | Kurven: {} | Punkte: {}",
                state.slider_count(),
                state.canvas.curves().len(),
                state.canvas.dots().len()
            ));

            ui.separator();

            let pending = state.pending_click_count();
            if pending > 0 {
                ui.label(format!("Klicks: {}/4", pending));
                ui.separator();
            }

            let clock = match state.options.tick_mode {
                TickMode::Interval => format!("Takt: {:.0} Hz", state.clock.nominal_rate()),
                TickMode::PerFrame => "Takt: pro Frame".to_string(),
            };
            ui.label(format!(
                "{} | Ticks/Frame: {} | Umkehrpunkte: {}",
                clock, state.stats.last_frame_ticks, state.stats.crossings_total
            ));

            ui.separator();

            let audio = if !state.options.audio_enabled {
                "aus"
            } else if state.cue.is_silent() {
                "kein Gerät"
            } else {
                "an"
            };
            ui.label(format!("Audio: {}", audio));

            if let Some(demo) = &state.demo {
                if !demo.is_finished() {
                    ui.separator();
                    ui.label(format!("Demo: {} ausstehend", demo.remaining()));
                }
            }
        });
    });
}
