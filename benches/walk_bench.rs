use chart_walk::core::{LinePoint, VisibleRange};
use chart_walk::render::{
    BandStyle, Color, DrawingSurface, GradientColor, LineStyle, RecordingSurface, SeriesStyle,
};
use chart_walk::walk::walk_line;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn oscillating_points(count: usize) -> Vec<LinePoint> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 0.2;
            let y = 500.0 + 120.0 * (x * 0.05).sin() + 15.0 * (x * 0.9).cos();
            LinePoint::new(x, y)
        })
        .collect()
}

fn split_style() -> SeriesStyle {
    SeriesStyle::split(
        Color::rgb(0.13, 0.59, 0.95),
        BandStyle::new(
            Color::rgb(0.15, 0.65, 0.6),
            GradientColor::new(Color::rgba(0.15, 0.65, 0.6, 0.4), Color::TRANSPARENT),
        ),
        BandStyle::new(
            Color::rgb(0.94, 0.33, 0.31),
            GradientColor::new(Color::rgba(0.94, 0.33, 0.31, 0.4), Color::TRANSPARENT),
        ),
    )
}

fn bench_band_walk_10k(c: &mut Criterion) {
    let points = oscillating_points(10_000);
    let style = split_style();

    c.bench_function("band_walk_10k", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            surface.begin_path().expect("begin path");
            let _ = walk_line(
                &mut surface,
                black_box(&points),
                VisibleRange::full(points.len()),
                LineStyle::default(),
                black_box(Some(500.0)),
                &style,
            )
            .expect("walk should succeed");
        })
    });
}

fn bench_uniform_walk_10k(c: &mut Criterion) {
    let points = oscillating_points(10_000);
    let style = SeriesStyle::uniform(Color::rgb(0.13, 0.59, 0.95));

    c.bench_function("uniform_walk_10k", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            surface.begin_path().expect("begin path");
            let _ = walk_line(
                &mut surface,
                black_box(&points),
                VisibleRange::full(points.len()),
                LineStyle::default(),
                None,
                &style,
            )
            .expect("walk should succeed");
        })
    });
}

criterion_group!(benches, bench_band_walk_10k, bench_uniform_walk_10k);
criterion_main!(benches);
