//! Sammelt Klicks, bis vier Kontrollpunkte eine Kurve ergeben.

use crate::core::{ControlPoints, CubicBezier, CurveColor};
use glam::Vec2;

/// Offener Klick-Stapel mit fester Farbe.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCurve {
    color: CurveColor,
    points: Vec<Vec2>,
}

impl PendingCurve {
    /// Beginnt einen neuen Stapel; die Farbe gilt für alle vier Punkte und die Kurve.
    pub fn new(color: CurveColor) -> Self {
        Self {
            color,
            points: Vec::with_capacity(4),
        }
    }

    pub fn color(&self) -> CurveColor {
        self.color
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Fügt einen Klick hinzu. Beim vierten Punkt wird die fertige Kurve geliefert.
    pub fn push(&mut self, position: Vec2) -> Option<CubicBezier> {
        self.points.push(position);
        let points: ControlPoints = self.points.as_slice().try_into().ok()?;
        Some(CubicBezier::from(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_click_completes_curve() {
        let mut pending = PendingCurve::new(CurveColor::rgb(1, 2, 3));

        assert!(pending.push(Vec2::new(0.0, 0.0)).is_none());
        assert!(pending.push(Vec2::new(1.0, 0.0)).is_none());
        assert!(pending.push(Vec2::new(2.0, 0.0)).is_none());
        let curve = pending.push(Vec2::new(3.0, 0.0)).expect("Kurve nach 4 Klicks");

        assert_eq!(curve.start(), Vec2::new(0.0, 0.0));
        assert_eq!(curve.end(), Vec2::new(3.0, 0.0));
        assert_eq!(pending.points().len(), 4);
        assert_eq!(pending.color(), CurveColor::rgb(1, 2, 3));
    }
}
