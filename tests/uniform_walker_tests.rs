use chart_walk::core::{LinePoint, VisibleRange};
use chart_walk::render::{
    Color, DrawCommand, DrawingSurface, LineDash, LineStyle, LineType, RecordingSurface,
};
use chart_walk::ChartError;
use chart_walk::walk::walk_uniform;

const LINE: Color = Color::rgb(0.13, 0.59, 0.95);

fn scenario_points() -> Vec<LinePoint> {
    vec![
        LinePoint::new(0.0, 10.0),
        LinePoint::new(10.0, 5.0),
        LinePoint::new(20.0, 15.0),
    ]
}

#[test]
fn uniform_walk_strokes_one_polyline_without_fill() {
    let points = scenario_points();
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");

    let report = walk_uniform(
        &mut surface,
        &points,
        VisibleRange::full(points.len()),
        LineStyle::new(2.0),
        LINE,
    )
    .expect("walk");

    assert_eq!(surface.strokes().len(), 1);
    assert_eq!(surface.strokes()[0].vertices, points);
    assert_eq!(surface.strokes()[0].color, LINE);
    assert!(surface.fills().is_empty());
    assert_eq!(report.segments.len(), 1);
    assert_eq!(report.segments[0].extreme, 5.0);
    assert!(!report.segments[0].filled);
}

#[test]
fn uniform_walk_keeps_path_for_caller_finalization() {
    let points = scenario_points();
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");
    walk_uniform(
        &mut surface,
        &points,
        VisibleRange::full(points.len()),
        LineStyle::default(),
        LINE,
    )
    .expect("walk");

    assert!(!surface.is_path_empty());
    surface.line_to(20.0, 100.0).expect("caller may continue the path");
}

#[test]
fn uniform_walk_applies_line_style_before_drawing() {
    let points = scenario_points();
    let mut surface = RecordingSurface::new();
    walk_uniform(
        &mut surface,
        &points,
        VisibleRange::full(points.len()),
        LineStyle::new(2.0).with_dash(LineDash::Dashed),
        LINE,
    )
    .expect("walk");

    let commands = surface.commands();
    assert_eq!(commands[0], DrawCommand::SetLineWidth { width: 2.0 });
    assert_eq!(
        commands[1],
        DrawCommand::SetLineDash {
            pattern: vec![4.0, 4.0]
        }
    );
    let first_move = commands
        .iter()
        .position(|command| matches!(command, DrawCommand::MoveTo { .. }))
        .expect("move_to");
    let stroke = commands
        .iter()
        .position(|command| matches!(command, DrawCommand::Stroke))
        .expect("stroke");
    assert!(first_move < stroke);
}

#[test]
fn stepped_uniform_walk_inserts_horizontal_runs() {
    let points = scenario_points();
    let mut surface = RecordingSurface::new();
    walk_uniform(
        &mut surface,
        &points,
        VisibleRange::full(points.len()),
        LineStyle::new(1.0).with_line_type(LineType::WithSteps),
        LINE,
    )
    .expect("walk");

    assert_eq!(
        surface.strokes()[0].vertices,
        vec![
            LinePoint::new(0.0, 10.0),
            LinePoint::new(10.0, 10.0),
            LinePoint::new(10.0, 5.0),
            LinePoint::new(20.0, 5.0),
            LinePoint::new(20.0, 15.0),
        ]
    );
}

#[test]
fn malformed_or_empty_ranges_draw_nothing() {
    let points = scenario_points();
    for range in [
        VisibleRange::new(2, 1),
        VisibleRange::new(0, 4),
        VisibleRange::new(1, 1),
    ] {
        let mut surface = RecordingSurface::new();
        let report = walk_uniform(&mut surface, &points, range, LineStyle::default(), LINE)
            .expect("malformed range is a no-op");
        assert!(report.is_empty());
        assert!(surface.commands().is_empty());
    }

    let mut surface = RecordingSurface::new();
    let report = walk_uniform(
        &mut surface,
        &[],
        VisibleRange::new(0, 0),
        LineStyle::default(),
        LINE,
    )
    .expect("empty points is a no-op");
    assert!(report.is_empty());
    assert!(surface.commands().is_empty());
}

#[test]
fn failed_uniform_walk_resets_path() {
    let points = vec![
        LinePoint::new(0.0, 10.0),
        LinePoint::new(10.0, f64::INFINITY),
        LinePoint::new(20.0, 15.0),
    ];
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");

    let err = walk_uniform(
        &mut surface,
        &points,
        VisibleRange::full(points.len()),
        LineStyle::default(),
        LINE,
    )
    .expect_err("non-finite vertex must fail");

    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(surface.is_path_empty());
    assert!(surface.strokes().is_empty());
}
