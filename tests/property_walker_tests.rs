use approx::relative_eq;
use chart_walk::core::{Band, LinePoint, VisibleRange, interpolate_crossing};
use chart_walk::render::{
    BandStyle, Color, DrawingSurface, GradientColor, LineStyle, RecordingSurface, SeriesStyle,
};
use chart_walk::walk::{walk_line, walk_uniform};
use proptest::prelude::*;

fn split_style() -> SeriesStyle {
    SeriesStyle::split(
        Color::rgb(0.1, 0.1, 0.1),
        BandStyle::new(
            Color::rgb(0.0, 0.8, 0.4),
            GradientColor::new(Color::rgba(0.0, 0.8, 0.4, 0.4), Color::TRANSPARENT),
        ),
        BandStyle::new(
            Color::rgb(0.9, 0.2, 0.2),
            GradientColor::new(Color::rgba(0.9, 0.2, 0.2, 0.4), Color::TRANSPARENT),
        ),
    )
}

fn points_from_levels(levels: &[i32]) -> Vec<LinePoint> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| LinePoint::new(i as f64 * 7.5, f64::from(*level)))
        .collect()
}

fn clamp_range(len: usize, from: usize, width: usize) -> VisibleRange {
    let from = from % len;
    let to = (from + width).min(len);
    VisibleRange::new(from, to)
}

proptest! {
    #[test]
    fn crossing_count_matches_band_changes(
        levels in proptest::collection::vec(0i32..20, 2..64),
        threshold in 0i32..20,
        from in 0usize..64,
        width in 2usize..64
    ) {
        let points = points_from_levels(&levels);
        let range = clamp_range(points.len(), from, width);
        prop_assume!(range.len() >= 2);
        let threshold = f64::from(threshold);

        let expected = points[range.from..range.to]
            .windows(2)
            .filter(|pair| Band::of_point(pair[0], threshold) != Band::of_point(pair[1], threshold))
            .count();

        let mut surface = RecordingSurface::new();
        surface.begin_path().expect("begin path");
        let report = walk_line(
            &mut surface,
            &points,
            range,
            LineStyle::default(),
            Some(threshold),
            &split_style(),
        )
        .expect("walk");

        prop_assert_eq!(report.crossings.len(), expected);
        prop_assert_eq!(report.segments.len(), expected + 1);
        prop_assert_eq!(surface.strokes().len(), expected + 1);
        prop_assert_eq!(surface.fills().len(), expected + 1);
        prop_assert!(surface.is_path_empty());
        for crossing in &report.crossings {
            prop_assert_eq!(crossing.y, threshold);
        }
    }

    #[test]
    fn interpolated_crossing_is_exact_and_reversible(
        x0 in -1_000.0f64..1_000.0,
        dx in 0.0f64..500.0,
        threshold in -1_000.0f64..1_000.0,
        above_by in 0.0f64..300.0,
        below_by in 0.01f64..300.0
    ) {
        let prev = LinePoint::new(x0, threshold - above_by);
        let curr = LinePoint::new(x0 + dx, threshold + below_by);

        let forward = interpolate_crossing(prev, curr, threshold);
        let backward = interpolate_crossing(curr, prev, threshold);

        prop_assert_eq!(forward.y, threshold);
        prop_assert_eq!(backward.y, threshold);
        prop_assert!(relative_eq!(forward.x, backward.x, epsilon = 1e-9, max_relative = 1e-9));
        prop_assert!(forward.x >= prev.x - 1e-9 && forward.x <= curr.x + 1e-9);
    }

    #[test]
    fn uniform_walk_visits_each_visible_point_once_in_order(
        levels in proptest::collection::vec(-500i32..500, 1..64),
        from in 0usize..64,
        width in 1usize..64
    ) {
        let points = points_from_levels(&levels);
        let range = clamp_range(points.len(), from, width);
        prop_assume!(!range.is_empty());

        let mut surface = RecordingSurface::new();
        surface.begin_path().expect("begin path");
        walk_uniform(&mut surface, &points, range, LineStyle::default(), Color::rgb(0.0, 0.0, 1.0))
            .expect("walk");

        prop_assert_eq!(surface.strokes().len(), 1);
        let stroked = &surface.strokes()[0].vertices;
        prop_assert_eq!(stroked.as_slice(), &points[range.from..range.to]);
        prop_assert!(stroked.windows(2).all(|pair| pair[0].x <= pair[1].x));
    }

    #[test]
    fn walks_are_deterministic(
        levels in proptest::collection::vec(0i32..40, 2..48),
        threshold in 0.0f64..40.0
    ) {
        let points = points_from_levels(&levels);
        let range = VisibleRange::full(points.len());

        let run = || {
            let mut surface = RecordingSurface::new();
            surface.begin_path().expect("begin path");
            walk_line(&mut surface, &points, range, LineStyle::default(), Some(threshold), &split_style())
                .expect("walk");
            surface.into_commands()
        };

        prop_assert_eq!(run(), run());
    }
}
