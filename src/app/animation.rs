//! Animation-Driver: bewegt alle Slider pro Tick entlang ihrer Kurven.

use crate::core::{CubicBezier, CurveColor, MarkerId, Slider};
use crate::shared::{BoundaryCue, MarkerSink};

/// Ergebnis eines Ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Anzahl bewegter Slider
    pub advanced: usize,
    /// Anzahl Umkehrpunkte in diesem Tick
    pub crossings: usize,
}

/// Besitzt alle aktiven Slider. Die Sammlung wächst nur.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    sliders: Vec<Slider>,
    default_step: f32,
    next_id: u64,
}

impl AnimationDriver {
    /// Erstellt einen leeren Driver mit Standard-Schrittweite.
    pub fn new(default_step: f32) -> Self {
        Self {
            sliders: Vec::new(),
            default_step,
            next_id: 1,
        }
    }

    pub fn default_step(&self) -> f32 {
        self.default_step
    }

    /// Schrittweite für künftig registrierte Slider. Bestehende bleiben unverändert.
    pub fn set_default_step(&mut self, step: f32) {
        self.default_step = step;
    }

    /// Registriert eine Kurve mit der Standard-Schrittweite.
    pub fn register(
        &mut self,
        curve: CubicBezier,
        color: CurveColor,
        markers: &mut dyn MarkerSink,
    ) -> MarkerId {
        self.register_with_step(curve, color, self.default_step, markers)
    }

    /// Registriert eine Kurve mit eigener Schrittweite und legt ihren Marker an.
    pub fn register_with_step(
        &mut self,
        curve: CubicBezier,
        color: CurveColor,
        step: f32,
        markers: &mut dyn MarkerSink,
    ) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;

        markers.create(id, color);
        self.sliders.push(Slider::new(curve, step, id));

        log::debug!("Slider {} registriert (step={})", id, step);
        id
    }

    /// Ändert die Schrittweite eines einzelnen Sliders.
    /// Gibt `false` zurück, wenn die ID unbekannt ist.
    pub fn set_step(&mut self, id: MarkerId, step: f32) -> bool {
        match self.sliders.iter_mut().find(|s| s.marker_id() == id) {
            Some(slider) => {
                slider.set_step(step);
                true
            }
            None => false,
        }
    }

    /// Ein Durchlauf über alle Slider: auswerten, Marker setzen, Schritt, Grenzprüfung.
    pub fn tick(&mut self, markers: &mut dyn MarkerSink, cue: &mut dyn BoundaryCue) -> TickReport {
        let mut report = TickReport::default();

        for slider in &mut self.sliders {
            markers.set_position(slider.marker_id(), slider.position());

            if slider.advance() {
                cue.play();
                report.crossings += 1;
            }
            report.advanced += 1;
        }

        report
    }

    pub fn slider(&self, id: MarkerId) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.marker_id() == id)
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }
}
