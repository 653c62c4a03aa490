//! Kubische Bézier-Kurve aus genau vier Kontrollpunkten.

use glam::Vec2;

/// Vier Kontrollpunkte: Start, Steuerpunkt 1, Steuerpunkt 2, Ende.
pub type ControlPoints = [Vec2; 4];

/// Unveränderliche kubische Bézier-Kurve.
///
/// Die Auswertung ist für jedes reelle `t` definiert; die Einschränkung
/// auf `[0, 1]` liegt beim Aufrufer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    points: ControlPoints,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus Start, zwei Steuerpunkten und Ende.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Read-only Zugriff auf die Kontrollpunkte.
    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    /// Startpunkt P0.
    pub fn start(&self) -> Vec2 {
        self.points[0]
    }

    /// Endpunkt P3.
    pub fn end(&self) -> Vec2 {
        self.points[3]
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn evaluate(&self, t: f32) -> Vec2 {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        p0 * (mt2 * mt) + p1 * (3.0 * mt2 * t) + p2 * (3.0 * mt * t2) + p3 * (t2 * t)
    }

    /// Dieselbe Kurve mit umgekehrter Punktreihenfolge (P3, P2, P1, P0).
    pub fn reversed(&self) -> Self {
        let [p0, p1, p2, p3] = self.points;
        Self::new(p3, p2, p1, p0)
    }

    /// Polylinie mit `segments + 1` gleichmäßig verteilten Parameterwerten.
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.evaluate(i as f32 / segments as f32))
            .collect()
    }
}

impl From<ControlPoints> for CubicBezier {
    fn from(points: ControlPoints) -> Self {
        Self { points }
    }
}
