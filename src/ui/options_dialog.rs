//! Optionen-Dialog für Animation, Palette, Darstellung und Audio.

use crate::app::{AppIntent, AppState};
use crate::core::CurveColor;
use crate::shared::TickMode;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Animation ───────────────────────────────────
                    ui.collapsing("Animation", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Schrittweite (neue Kurven):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.step)
                                        .range(0.0001..=0.5)
                                        .speed(0.0001)
                                        .max_decimals(5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Takt:");
                            changed |= ui
                                .radio_value(&mut opts.tick_mode, TickMode::Interval, "Intervall")
                                .changed();
                            changed |= ui
                                .radio_value(&mut opts.tick_mode, TickMode::PerFrame, "Pro Frame")
                                .changed();
                        });
                        ui.add_enabled_ui(opts.tick_mode == TickMode::Interval, |ui| {
                            ui.horizontal(|ui| {
                                ui.label("Intervall (ms):");
                                changed |= ui
                                    .add(
                                        egui::DragValue::new(&mut opts.tick_interval_ms)
                                            .range(0.5..=100.0)
                                            .speed(0.1),
                                    )
                                    .changed();
                            });
                            ui.horizontal(|ui| {
                                ui.label("Max. Ticks/Frame:");
                                changed |= ui
                                    .add(
                                        egui::DragValue::new(&mut opts.max_ticks_per_frame)
                                            .range(1..=10_000),
                                    )
                                    .changed();
                            });
                        });
                    });

                    // ── Palette ─────────────────────────────────────
                    ui.collapsing("Palette", |ui| {
                        for (index, hex) in opts.palette.iter_mut().enumerate() {
                            changed |= palette_edit(ui, index, hex);
                        }
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Marker-Größe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_size_px)
                                        .range(1.0..=64.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Punkt-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.dot_radius_px)
                                        .range(0.5..=32.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Linienstärke (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_stroke_width)
                                        .range(0.5..=16.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Audio ───────────────────────────────────────
                    ui.collapsing("Audio", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.audio_enabled, "Klick an Umkehrpunkten")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Lautstärke:");
                            changed |= ui
                                .add(egui::Slider::new(&mut opts.audio_volume, 0.0..=1.0))
                                .changed();
                        });
                        if state.cue.is_silent() {
                            ui.label("Kein Ausgabegerät verfügbar.");
                        }
                    });

                    // ── Demo ────────────────────────────────────────
                    ui.collapsing("Demo (ab nächstem Start)", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.demo_enabled, "Demo-Kurven abspielen")
                            .changed();
                        ui.horizontal(|ui| {
                            ui.label("Abstand (ms):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.demo_interval_ms)
                                        .range(0..=5_000),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Versatz (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.demo_offset_px)
                                        .range(0.0..=500.0)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Farb-Editor für einen Paletten-Eintrag im Hex-Format.
fn palette_edit(ui: &mut egui::Ui, index: usize, hex: &mut String) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(format!("Farbe {}:", index + 1));
        match CurveColor::from_hex(hex) {
            Ok(color) => {
                let mut rgb = [color.r, color.g, color.b];
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    *hex = CurveColor::rgb(rgb[0], rgb[1], rgb[2]).to_hex();
                    changed = true;
                }
            }
            Err(_) => {
                ui.colored_label(egui::Color32::RED, hex.as_str());
            }
        }
    });
    changed
}
