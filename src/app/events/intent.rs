use crate::core::{ControlPoints, CurveColor, MarkerId};
use crate::shared::CurveOptions;
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick auf die Zeichenfläche (Pixel relativ zur Zeichenfläche)
    CanvasClicked { position: glam::Vec2 },
    /// Fertige Kurve von außen (z.B. Skript), Farbe explizit
    CurveSubmitted {
        points: ControlPoints,
        color: CurveColor,
    },
    /// Schrittweite eines einzelnen Sliders ändern
    SliderStepChangeRequested { id: MarkerId, step: f32 },
    /// Neuer Frame: fällige Ticks und Demo-Kurven abarbeiten
    FrameStarted { now: Instant },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Audio-Klick an/aus
    AudioToggleRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert (Live-Preview)
    OptionsChanged { options: Box<CurveOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen als TOML speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
