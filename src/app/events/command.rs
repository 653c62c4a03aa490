use crate::core::{CubicBezier, CurveColor, MarkerId};
use crate::shared::CurveOptions;
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Klickpunkt zum offenen Stapel hinzufügen (4. Punkt erzeugt die Kurve)
    AddControlPoint { position: glam::Vec2 },
    /// Kurve zeichnen und als Slider registrieren
    CreateCurve {
        curve: CubicBezier,
        color: CurveColor,
    },
    /// Schrittweite eines Sliders setzen
    SetSliderStep { id: MarkerId, step: f32 },
    /// Fällige Demo-Kurven erzeugen und Driver-Ticks ausführen
    AdvanceAnimation { now: Instant },
    /// Viewport-Größe im State setzen
    SetViewportSize { size: [f32; 2] },
    /// Audio-Klick schalten
    SetAudioEnabled { enabled: bool },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Geänderte Optionen übernehmen
    ApplyOptions { options: Box<CurveOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen in die TOML-Datei schreiben
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
