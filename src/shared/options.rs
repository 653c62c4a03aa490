//! Zentrale Konfiguration für Curves.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CurveColor;
use serde::{Deserialize, Serialize};

// ── Animation ───────────────────────────────────────────────────────

/// Standard-Schrittweite von `t` pro Tick.
pub const DEFAULT_STEP: f32 = 0.00125;
/// Tick-Intervall in Millisekunden (kürzestes Intervall, das ein Browser-Timer erlaubt).
pub const TICK_INTERVAL_MS: f32 = 4.0;
/// Kleinstes zulässiges Tick-Intervall in Millisekunden.
pub const MIN_TICK_INTERVAL_MS: f32 = 0.5;
/// Größtes zulässiges Tick-Intervall in Millisekunden.
pub const MAX_TICK_INTERVAL_MS: f32 = 100.0;
/// Obergrenze nachzuholender Ticks pro Frame (z.B. nach Fenster-Minimierung).
pub const MAX_TICKS_PER_FRAME: u32 = 250;

// ── Farben ──────────────────────────────────────────────────────────

/// Feste Palette: eine Farbe pro Demo-Kurve, Zufallsauswahl für Klick-Kurven.
pub const PALETTE: [&str; 7] = [
    "#ff5c5c", "#39da8a", "#5b8dee", "#fdac41", "#f6dc62", "#74e0e6", "#ac5cd9",
];

// ── Demo ────────────────────────────────────────────────────────────

/// Zeitabstand zwischen zwei Demo-Kurven.
pub const DEMO_INTERVAL_MS: u64 = 100;
/// Versatz pro Demo-Kurve in Pixeln.
pub const DEMO_OFFSET_PX: f32 = 50.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Kantenlänge der Marker-Quadrate in Pixeln.
pub const MARKER_SIZE_PX: f32 = 8.0;
/// Radius der Kontrollpunkt-Punkte in Pixeln.
pub const DOT_RADIUS_PX: f32 = 5.0;
/// Linienstärke der Kurven in Pixeln.
pub const CURVE_STROKE_WIDTH: f32 = 1.0;
/// Alpha der Kurvenlinie (`#rrggbb90`).
pub const CURVE_ALPHA: u8 = 0x90;
/// Alpha der Kontrollpunkte (`#rrggbb30`).
pub const DOT_ALPHA: u8 = 0x30;

// ── Audio ───────────────────────────────────────────────────────────

/// Standard-Lautstärke des Klicks.
pub const AUDIO_VOLUME: f32 = 0.6;

/// Taktquelle für den Animation-Driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TickMode {
    /// Feste Tick-Rate, pro Frame werden alle fälligen Ticks nachgeholt
    #[default]
    Interval,
    /// Genau ein Tick pro gezeichnetem Frame
    PerFrame,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `curves.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveOptions {
    // ── Animation ───────────────────────────────────────────────
    /// Schrittweite von `t` pro Tick für neue Slider
    pub step: f32,
    /// Taktquelle
    pub tick_mode: TickMode,
    /// Tick-Intervall im Modus `Interval`
    pub tick_interval_ms: f32,
    /// Maximal nachgeholte Ticks pro Frame
    pub max_ticks_per_frame: u32,

    // ── Farben ──────────────────────────────────────────────────
    /// Palette als Hex-Strings (`#rrggbb`)
    pub palette: Vec<String>,

    // ── Demo ────────────────────────────────────────────────────
    /// Demo-Kurven beim Start abspielen
    pub demo_enabled: bool,
    /// Zeitabstand zwischen Demo-Kurven
    pub demo_interval_ms: u64,
    /// Versatz pro Demo-Kurve
    pub demo_offset_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Marker-Kantenlänge
    pub marker_size_px: f32,
    /// Radius der Kontrollpunkte
    pub dot_radius_px: f32,
    /// Linienstärke der Kurven
    pub curve_stroke_width: f32,

    // ── Audio ───────────────────────────────────────────────────
    /// Klick an Umkehrpunkten abspielen
    pub audio_enabled: bool,
    /// Lautstärke (0.0–1.0)
    pub audio_volume: f32,
    /// Optionales WAV-Sample statt des synthetischen Klicks
    pub cue_sample_path: Option<String>,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tick_mode: TickMode::Interval,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,

            palette: PALETTE.iter().map(|c| c.to_string()).collect(),

            demo_enabled: true,
            demo_interval_ms: DEMO_INTERVAL_MS,
            demo_offset_px: DEMO_OFFSET_PX,

            marker_size_px: MARKER_SIZE_PX,
            dot_radius_px: DOT_RADIUS_PX,
            curve_stroke_width: CURVE_STROKE_WIDTH,

            audio_enabled: true,
            audio_volume: AUDIO_VOLUME,
            cue_sample_path: None,
        }
    }
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Prüft Palette, Schrittweite und Tick-Intervall; liefert die geparste Palette.
    pub fn validate(&self) -> anyhow::Result<Vec<CurveColor>> {
        if !(self.step.is_finite() && self.step > 0.0) {
            anyhow::bail!("step muss positiv sein, ist {}", self.step);
        }
        if !(self.tick_interval_ms.is_finite() && self.tick_interval_ms > 0.0) {
            anyhow::bail!(
                "tick_interval_ms muss positiv und endlich sein, ist {}",
                self.tick_interval_ms
            );
        }
        self.palette_colors()
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curves"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curves.toml")
    }

    /// Parst die Palette. Leere Paletten sind ungültig.
    pub fn palette_colors(&self) -> anyhow::Result<Vec<CurveColor>> {
        if self.palette.is_empty() {
            anyhow::bail!("Palette ist leer");
        }
        self.palette
            .iter()
            .map(|hex| CurveColor::from_hex(hex))
            .collect()
    }

    /// Tick-Intervall als `Duration`, geklemmt auf
    /// `MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS`. Nicht-endliche Werte
    /// ergeben das Standardintervall.
    pub fn tick_interval(&self) -> std::time::Duration {
        let ms = if self.tick_interval_ms.is_finite() {
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
        } else {
            log::warn!(
                "tick_interval_ms = {} ungültig, verwende {} ms",
                self.tick_interval_ms,
                TICK_INTERVAL_MS
            );
            TICK_INTERVAL_MS
        };
        std::time::Duration::try_from_secs_f64(f64::from(ms) / 1000.0)
            .unwrap_or(std::time::Duration::from_millis(TICK_INTERVAL_MS as u64))
    }
}
