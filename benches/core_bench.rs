use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curves::shared::MarkerLayer;
use curves::{AnimationDriver, CubicBezier, CurveColor, SilentCue};
use glam::Vec2;
use std::hint::black_box;

fn synthetic_curve(index: usize) -> CubicBezier {
    let offset = (index % 100) as f32 * 3.0;
    CubicBezier::new(
        Vec2::new(100.0 - offset, 600.0),
        Vec2::new(450.0, 180.0 - offset),
        Vec2::new(700.0, 180.0 - offset),
        Vec2::new(1000.0 + offset, 600.0),
    )
}

fn bench_evaluate(c: &mut Criterion) {
    let curve = synthetic_curve(7);

    c.bench_function("bezier_evaluate_1024", |b| {
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for i in 0..1024 {
                acc += curve.evaluate(black_box(i as f32 / 1023.0));
            }
            black_box(acc)
        })
    });

    c.bench_function("bezier_sample_64", |b| {
        b.iter(|| black_box(curve.sample(black_box(64)).len()))
    });
}

fn bench_driver_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_tick");

    for &slider_count in &[10usize, 1_000usize, 10_000usize] {
        let mut driver = AnimationDriver::new(0.00125);
        let mut markers = MarkerLayer::new();
        for index in 0..slider_count {
            driver.register(
                synthetic_curve(index),
                CurveColor::rgb((index % 255) as u8, 0x8d, 0xee),
                &mut markers,
            );
        }

        group.bench_with_input(
            BenchmarkId::new("single_tick", slider_count),
            &slider_count,
            |b, _| {
                b.iter(|| black_box(driver.tick(&mut markers, &mut SilentCue).crossings))
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_evaluate, bench_driver_tick);
criterion_main!(core_benches);
