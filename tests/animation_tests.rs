use approx::assert_relative_eq;
use curves::shared::MarkerLayer;
use curves::{AnimationDriver, BoundaryCue, CubicBezier, CurveColor, Direction, SilentCue};
use glam::Vec2;

#[derive(Default)]
struct TickCue {
    tick: usize,
    fired_at: Vec<usize>,
}

impl BoundaryCue for TickCue {
    fn play(&mut self) {
        self.fired_at.push(self.tick);
    }
}

fn arch() -> CubicBezier {
    CubicBezier::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 0.0),
    )
}

#[test]
fn test_marker_bounces_and_cues_at_each_end() {
    let mut driver = AnimationDriver::new(0.1);
    let mut markers = MarkerLayer::new();
    let mut cue = TickCue::default();
    let id = driver.register(arch(), CurveColor::rgb(0x5b, 0x8d, 0xee), &mut markers);

    for tick in 1..=20 {
        cue.tick = tick;
        driver.tick(&mut markers, &mut cue);
    }

    assert_eq!(cue.fired_at, vec![10, 20]);

    let slider = driver.slider(id).expect("Slider registriert");
    assert_eq!(slider.t(), 0.0);
    assert_eq!(slider.direction(), Direction::Forward);

    // Letzte gemeldete Position ist die vor dem Rücksprung auf t = 0
    let center = markers.get(id).and_then(|m| m.center).expect("Marker sichtbar");
    let expected = arch().evaluate(0.1);
    assert_relative_eq!(center.x, expected.x, epsilon = 1e-3);
    assert_relative_eq!(center.y, expected.y, epsilon = 1e-3);
}

#[test]
fn test_marker_reaches_curve_end_exactly() {
    let mut driver = AnimationDriver::new(0.3);
    let mut markers = MarkerLayer::new();
    let id = driver.register(arch(), CurveColor::rgb(1, 1, 1), &mut markers);

    // 0 → 0.3 → 0.6 → 0.9 → 1.0 (geklemmt); der fünfte Tick meldet t = 1
    for _ in 0..5 {
        driver.tick(&mut markers, &mut SilentCue);
    }

    let center = markers.get(id).and_then(|m| m.center).expect("Marker sichtbar");
    assert_eq!(center, Vec2::new(100.0, 0.0));
}

#[test]
fn test_many_sliders_keep_own_step() {
    let mut driver = AnimationDriver::new(0.25);
    let mut markers = MarkerLayer::new();
    let slow = driver.register(arch(), CurveColor::rgb(1, 0, 0), &mut markers);
    let fast = driver.register_with_step(arch(), CurveColor::rgb(0, 1, 0), 0.5, &mut markers);

    let mut total = 0;
    for _ in 0..4 {
        total += driver.tick(&mut markers, &mut SilentCue).crossings;
    }

    // slow: eine Umkehr (Tick 4), fast: zwei (Tick 2 und 4)
    assert_eq!(total, 3);
    assert_eq!(driver.slider(slow).unwrap().direction(), Direction::Reverse);
    assert_eq!(driver.slider(fast).unwrap().direction(), Direction::Forward);
    assert_eq!(markers.len(), 2);
}
