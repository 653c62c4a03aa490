//! Slider: Animationszustand eines Markers entlang einer Kurve.

use super::CubicBezier;
use glam::Vec2;
use std::fmt;

/// Eindeutige, vom Driver vergebene Marker-ID (fortlaufend ab 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b-{}", self.0)
    }
}

/// Laufrichtung auf der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// t wächst Richtung 1
    #[default]
    Forward,
    /// t fällt Richtung 0
    Reverse,
}

impl Direction {
    /// Gegenrichtung.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Eine animierte Kurve: Punkte sind fix, nur `t` und `direction` ändern sich.
#[derive(Debug, Clone)]
pub struct Slider {
    curve: CubicBezier,
    t: f32,
    direction: Direction,
    step: f32,
    marker_id: MarkerId,
}

impl Slider {
    /// Neuer Slider am Kurvenanfang, vorwärts laufend.
    pub fn new(curve: CubicBezier, step: f32, marker_id: MarkerId) -> Self {
        Self {
            curve,
            t: 0.0,
            direction: Direction::Forward,
            step,
            marker_id,
        }
    }

    /// Setzt Parameter und Richtung explizit (z.B. für Tests oder Wiederaufnahme).
    pub fn with_state(mut self, t: f32, direction: Direction) -> Self {
        self.t = t;
        self.direction = direction;
        self
    }

    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn marker_id(&self) -> MarkerId {
        self.marker_id
    }

    /// Ändert nur die Schrittweite dieses Sliders.
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }

    /// Kurvenposition beim aktuellen `t`.
    pub fn position(&self) -> Vec2 {
        self.curve.evaluate(self.t)
    }

    /// Bewegt `t` um einen Schritt in Laufrichtung.
    ///
    /// Die Grenzprüfung nutzt den Wert nach dem Schritt: bei Überschreitung
    /// wird `t` exakt auf 0 bzw. 1 gesetzt und die Richtung gedreht.
    /// Gibt `true` zurück, wenn dabei eine Grenze überschritten wurde.
    pub fn advance(&mut self) -> bool {
        match self.direction {
            Direction::Forward => self.t += self.step,
            Direction::Reverse => self.t -= self.step,
        }

        let crossed = match self.direction {
            Direction::Forward if self.t >= 1.0 => {
                self.t = 1.0;
                true
            }
            Direction::Reverse if self.t <= 0.0 => {
                self.t = 0.0;
                true
            }
            _ => false,
        };

        if crossed {
            self.direction = self.direction.flipped();
        }
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CubicBezier {
        CubicBezier::new(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        )
    }

    #[test]
    fn new_slider_starts_forward_at_zero() {
        let slider = Slider::new(line(), 0.25, MarkerId(1));
        assert_eq!(slider.t(), 0.0);
        assert_eq!(slider.direction(), Direction::Forward);
        assert_eq!(slider.position(), Vec2::ZERO);
    }

    #[test]
    fn overshoot_is_clamped_to_one() {
        let mut slider = Slider::new(line(), 0.3, MarkerId(1)).with_state(0.9, Direction::Forward);

        let crossed = slider.advance();

        assert!(crossed);
        assert_eq!(slider.t(), 1.0);
        assert_eq!(slider.direction(), Direction::Reverse);
    }

    #[test]
    fn undershoot_is_clamped_to_zero() {
        let mut slider = Slider::new(line(), 0.3, MarkerId(1)).with_state(0.1, Direction::Reverse);

        let crossed = slider.advance();

        assert!(crossed);
        assert_eq!(slider.t(), 0.0);
        assert_eq!(slider.direction(), Direction::Forward);
    }

    #[test]
    fn clamped_slider_moves_away_on_next_step() {
        let mut slider = Slider::new(line(), 0.3, MarkerId(1)).with_state(0.9, Direction::Forward);
        slider.advance();

        let crossed = slider.advance();

        assert!(!crossed);
        assert!((slider.t() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn reverse_at_one_does_not_flip() {
        // t=1 rückwärts: nur die Untergrenze zählt
        let mut slider = Slider::new(line(), 0.5, MarkerId(1)).with_state(1.0, Direction::Reverse);

        assert!(!slider.advance());
        assert_eq!(slider.direction(), Direction::Reverse);
    }

    #[test]
    fn marker_id_display_uses_block_prefix() {
        assert_eq!(MarkerId(7).to_string(), "b-7");
    }
}
