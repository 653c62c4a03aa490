use crate::app::animation::AnimationDriver;
use crate::app::demo::DemoScript;
use crate::app::pending::PendingCurve;
use crate::app::tick_clock::TickClock;
use crate::core::CurveColor;
use crate::shared::options::PALETTE;
use crate::shared::{BoundaryCue, CanvasLayer, CurveOptions, MarkerLayer, SilentCue};
use std::path::PathBuf;
use std::time::Duration;

use super::ViewState;

/// Laufende Zähler für Status-Anzeige und Tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStats {
    /// Ausgeführte Ticks seit Start
    pub ticks_total: u64,
    /// Umkehrpunkte seit Start
    pub crossings_total: u64,
    /// Ticks im letzten Frame
    pub last_frame_ticks: u32,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: CurveOptions,
    /// Geparste Palette aus `options.palette`
    pub palette: Vec<CurveColor>,
    /// View-State
    pub view: ViewState,
    /// Alle aktiven Slider
    pub driver: AnimationDriver,
    /// Einmalig gezeichnete Kurven und Kontrollpunkte
    pub canvas: CanvasLayer,
    /// Marker, deren Position der Driver pro Tick setzt
    pub markers: MarkerLayer,
    /// Offener Klick-Stapel (None = noch kein Klick)
    pub pending: Option<PendingCurve>,
    /// Taktquelle für den Driver
    pub clock: TickClock,
    /// Skriptierte Demo (None = deaktiviert)
    pub demo: Option<DemoScript>,
    /// Audio-Ausgabe für Umkehrpunkte (Host setzt den echten Klick ein)
    pub cue: Box<dyn BoundaryCue>,
    /// Zähler
    pub stats: AnimationStats,
    /// Zielpfad für gespeicherte Optionen
    pub config_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren State mit Standardoptionen, ohne Demo und ohne Audio.
    pub fn new() -> Self {
        let mut options = CurveOptions::default();
        options.demo_enabled = false;
        Self::with_options(options)
    }

    /// Erstellt den State aus geladenen Optionen.
    ///
    /// Der Demo-Zeitplan beginnt mit dem ersten Frame, der eine Viewport-Größe kennt.
    pub fn with_options(options: CurveOptions) -> Self {
        let palette = Self::parse_palette(&options);
        let demo = options.demo_enabled.then(|| {
            DemoScript::new(
                Duration::from_millis(options.demo_interval_ms),
                options.demo_offset_px,
                palette.clone(),
            )
        });

        Self {
            palette,
            view: ViewState::new(),
            driver: AnimationDriver::new(options.step),
            canvas: CanvasLayer::new(),
            markers: MarkerLayer::new(),
            pending: None,
            clock: TickClock::new(
                options.tick_mode,
                options.tick_interval(),
                options.max_ticks_per_frame,
            ),
            demo,
            cue: Box::new(SilentCue),
            stats: AnimationStats::default(),
            config_path: CurveOptions::config_path(),
            show_options_dialog: false,
            should_exit: false,
            options,
        }
    }

    /// Parst die Palette; bei Fehler die eingebaute Standardpalette.
    pub(crate) fn parse_palette(options: &CurveOptions) -> Vec<CurveColor> {
        options.palette_colors().unwrap_or_else(|e| {
            log::warn!("Palette ungültig, verwende Standardpalette: {:#}", e);
            PALETTE
                .iter()
                .filter_map(|hex| CurveColor::from_hex(hex).ok())
                .collect()
        })
    }

    /// Anzahl aktiver Slider (für UI-Anzeige)
    pub fn slider_count(&self) -> usize {
        self.driver.len()
    }

    /// Anzahl gesammelter Klicks im offenen Stapel
    pub fn pending_click_count(&self) -> usize {
        self.pending.as_ref().map_or(0, |p| p.points().len())
    }

    /// True, solange die Animation laufende Frames braucht.
    pub fn needs_animation_frames(&self) -> bool {
        !self.driver.is_empty() || self.demo.as_ref().is_some_and(|d| !d.is_finished())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
