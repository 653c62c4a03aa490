//! Curves.
//!
//! Klick-gesteuerte Bézier-Animation mit egui: vier Klicks ergeben eine Kurve,
//! ein Marker pendelt darauf hin und her und klickt an jedem Umkehrpunkt.

use curves::{render, ui, AppController, AppIntent, AppState, AudioCue, CurveOptions};
use eframe::egui;
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curves v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Curves"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curves",
            options,
            Box::new(|_cc| Ok(Box::new(CurvesApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CurvesApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl CurvesApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = CurveOptions::config_path();
        let options = CurveOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        state.config_path = config_path;
        state.cue = Box::new(AudioCue::open_or_silent(&state.options));

        Self {
            state,
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for CurvesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_panel_events(ctx);
        self.process_events(events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(18)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                // Reihenfolge: Größe → Klicks → Ticks, damit der Frame den neuesten Stand zeigt
                let mut events = self.input.collect_canvas_events(ui, &response);
                events.push(AppIntent::FrameStarted {
                    now: Instant::now(),
                });
                self.process_events(events);

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);
                self.renderer.render_scene(ui.painter(), rect, &scene);

                if scene.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Vier Klicks setzen eine Kurve",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        if self.state.needs_animation_frames() {
            ctx.request_repaint();
        }
    }
}

impl CurvesApp {
    fn collect_panel_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_options_dialog(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}
