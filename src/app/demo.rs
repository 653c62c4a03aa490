//! Skriptierte Demo: eine Kurve pro Palettenfarbe, zeitversetzt.
//!
//! Kurve `i` wird `i · interval` nach dem Start fällig. Das Layout hängt nur
//! von der Viewport-Größe und dem Index ab.

use crate::core::{CubicBezier, CurveColor};
use glam::Vec2;
use std::time::{Duration, Instant};

/// Eine fällige Demo-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoCurve {
    pub index: usize,
    pub curve: CubicBezier,
    pub color: CurveColor,
}

/// Kontrollpunkte der Demo-Kurve `index` für einen Viewport `[w, h]`.
pub fn demo_layout(viewport: [f32; 2], index: usize, offset_px: f32) -> CubicBezier {
    let [w, h] = viewport;
    let offset = index as f32 * offset_px;
    let baseline = h - h / 5.0;
    let top = h / 4.0 - offset;

    CubicBezier::new(
        Vec2::new(w / 4.25 - offset, baseline),
        Vec2::new(w / 2.25, top),
        Vec2::new(w / 1.75, top),
        Vec2::new(w / 1.25 + offset, baseline),
    )
}

/// Zeitplan der Demo-Kurven.
#[derive(Debug, Clone)]
pub struct DemoScript {
    /// Zeitpunkt des ersten Aufrufs mit bekannter Viewport-Größe
    started: Option<Instant>,
    interval: Duration,
    offset_px: f32,
    colors: Vec<CurveColor>,
    next: usize,
}

impl DemoScript {
    pub fn new(interval: Duration, offset_px: f32, colors: Vec<CurveColor>) -> Self {
        Self {
            started: None,
            interval,
            offset_px,
            colors,
            next: 0,
        }
    }

    /// Alle bis `now` fälligen Kurven; jede wird genau einmal geliefert.
    ///
    /// Der Zeitplan beginnt beim ersten Aufruf mit bekannter Viewport-Größe;
    /// vorher wird nichts geliefert.
    pub fn take_due(&mut self, now: Instant, viewport: [f32; 2]) -> Vec<DemoCurve> {
        if viewport[0] <= 0.0 || viewport[1] <= 0.0 {
            return Vec::new();
        }
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        let mut due = Vec::new();
        while self.next < self.colors.len() && self.is_due(self.next, elapsed) {
            let index = self.next;
            due.push(DemoCurve {
                index,
                curve: demo_layout(viewport, index, self.offset_px),
                color: self.colors[index],
            });
            self.next += 1;
        }
        if !due.is_empty() {
            log::debug!("Demo: {} Kurve(n) fällig, {} offen", due.len(), self.remaining());
        }
        due
    }

    fn is_due(&self, index: usize, elapsed: Duration) -> bool {
        u32::try_from(index)
            .ok()
            .and_then(|n| self.interval.checked_mul(n))
            .is_some_and(|offset| offset <= elapsed)
    }

    pub fn remaining(&self) -> usize {
        self.colors.len() - self.next
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn colors(n: usize) -> Vec<CurveColor> {
        (0..n).map(|i| CurveColor::rgb(i as u8, 0, 0)).collect()
    }

    #[test]
    fn layout_for_first_curve() {
        let curve = demo_layout([1700.0, 1000.0], 0, 50.0);
        let [p0, p1, p2, p3] = *curve.points();

        assert_relative_eq!(p0.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(p0.y, 800.0, epsilon = 1e-3);
        assert_relative_eq!(p1.x, 1700.0 / 2.25, epsilon = 1e-3);
        assert_relative_eq!(p1.y, 250.0, epsilon = 1e-3);
        assert_relative_eq!(p2.x, 1700.0 / 1.75, epsilon = 1e-3);
        assert_relative_eq!(p2.y, 250.0, epsilon = 1e-3);
        assert_relative_eq!(p3.x, 1360.0, epsilon = 1e-3);
        assert_relative_eq!(p3.y, 800.0, epsilon = 1e-3);
    }

    #[test]
    fn layout_offset_widens_and_raises() {
        let base = demo_layout([1700.0, 1000.0], 0, 50.0);
        let third = demo_layout([1700.0, 1000.0], 2, 50.0);

        assert_relative_eq!(third.start().x, base.start().x - 100.0, epsilon = 1e-3);
        assert_relative_eq!(third.end().x, base.end().x + 100.0, epsilon = 1e-3);
        assert_relative_eq!(third.points()[1].y, base.points()[1].y - 100.0, epsilon = 1e-3);
        assert_eq!(third.start().y, base.start().y);
    }

    #[test]
    fn curves_become_due_at_interval_offsets() {
        let start = Instant::now();
        let mut script = DemoScript::new(Duration::from_millis(100), 50.0, colors(7));
        let viewport = [800.0, 600.0];

        let first = script.take_due(start, viewport);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].index, 0);

        let next = script.take_due(start + Duration::from_millis(250), viewport);
        assert_eq!(next.iter().map(|c| c.index).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(next[1].color, CurveColor::rgb(2, 0, 0));

        let rest = script.take_due(start + Duration::from_secs(5), viewport);
        assert_eq!(rest.len(), 4);
        assert!(script.is_finished());
        assert!(script.take_due(start + Duration::from_secs(6), viewport).is_empty());
    }

    #[test]
    fn schedule_starts_with_first_known_viewport() {
        let start = Instant::now();
        let mut script = DemoScript::new(Duration::from_millis(100), 50.0, colors(3));

        assert!(script.take_due(start + Duration::from_secs(1), [0.0, 0.0]).is_empty());
        assert_eq!(script.remaining(), 3);

        // Langsamer erster Frame: nur Kurve 0, der Rest folgt im Takt
        let first = script.take_due(start + Duration::from_secs(1), [640.0, 480.0]);
        assert_eq!(first.len(), 1);

        let later = start + Duration::from_millis(1_150);
        let next = script.take_due(later, [640.0, 480.0]);
        assert_eq!(next.iter().map(|c| c.index).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn huge_interval_never_overflows() {
        let start = Instant::now();
        let mut script = DemoScript::new(Duration::from_millis(u64::MAX), 50.0, colors(3));

        assert_eq!(script.take_due(start, [640.0, 480.0]).len(), 1);
        assert!(script
            .take_due(start + Duration::from_secs(3600), [640.0, 480.0])
            .is_empty());
        assert_eq!(script.remaining(), 2);
    }
}
