//! Capability-Schnittstellen zwischen Animation und Ausgabe.
//!
//! `app` ruft sie auf, `render` und `audio` implementieren sie.

use crate::core::{CurveColor, MarkerId};
use glam::Vec2;

/// Zieloberfläche für Marker: Erzeugen einmal pro Slider, Positionieren pro Tick.
pub trait MarkerSink {
    /// Legt einen dauerhaften Marker mit der Farbe der Kurve an.
    fn create(&mut self, id: MarkerId, color: CurveColor);

    /// Setzt den Mittelpunkt des Markers auf `position`.
    fn set_position(&mut self, id: MarkerId, position: Vec2);
}

/// Signal an jedem Umkehrpunkt. Darf nicht blockieren.
pub trait BoundaryCue {
    fn play(&mut self);

    /// Lautstärke 0.0–1.0; ohne hörbare Ausgabe wirkungslos.
    fn set_volume(&mut self, _volume: f32) {}

    /// True, wenn `play()` garantiert nichts ausgibt.
    fn is_silent(&self) -> bool {
        false
    }
}

/// Cue ohne Wirkung (Audio deaktiviert oder kein Gerät).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl BoundaryCue for SilentCue {
    fn play(&mut self) {}

    fn is_silent(&self) -> bool {
        true
    }
}
