use chart_walk::ChartError;
use chart_walk::render::{
    Color, DrawCommand, DrawingSurface, FillStyle, LinearGradient, RecordingSurface,
};

#[test]
fn painting_an_empty_path_is_a_protocol_violation() {
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");

    let err = surface.fill().expect_err("fill without path must fail");
    assert!(matches!(err, ChartError::SurfaceState(_)));
    let err = surface.stroke().expect_err("stroke without path must fail");
    assert!(matches!(err, ChartError::SurfaceState(_)));
}

#[test]
fn line_to_requires_current_point() {
    let mut surface = RecordingSurface::new();
    let err = surface.line_to(1.0, 1.0).expect_err("line_to must fail");
    assert!(matches!(err, ChartError::SurfaceState(_)));

    let err = surface.close_path().expect_err("close_path must fail");
    assert!(matches!(err, ChartError::SurfaceState(_)));
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let mut surface = RecordingSurface::new();
    let err = surface.move_to(f64::NAN, 0.0).expect_err("nan must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn stroke_and_fill_do_not_consume_the_path() {
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");
    surface.move_to(0.0, 0.0).expect("move");
    surface.line_to(10.0, 0.0).expect("line");
    surface.line_to(10.0, 10.0).expect("line");
    surface.close_path().expect("close");

    surface.stroke().expect("stroke");
    surface
        .set_fill_style(&FillStyle::from(Color::rgb(0.5, 0.5, 0.5)))
        .expect("fill style");
    surface.fill().expect("fill");

    assert_eq!(surface.strokes()[0].vertices.len(), 3);
    assert_eq!(surface.fills()[0].vertices.len(), 3);
    assert!(surface.fills()[0].closed);
    assert!(!surface.is_path_empty());

    surface.begin_path().expect("begin path");
    assert!(surface.is_path_empty());
}

#[test]
fn invalid_styles_are_rejected() {
    let mut surface = RecordingSurface::new();
    assert!(surface.set_stroke_style(Color::rgb(2.0, 0.0, 0.0)).is_err());
    assert!(surface.set_line_width(0.0).is_err());

    let gradient = LinearGradient::new(0.0, 0.0, 0.0, 1.0).with_stop(0.0, Color::rgba(0.0, 0.0, 0.0, -1.0));
    assert!(surface.set_fill_style(&FillStyle::from(gradient)).is_err());
    assert!(surface.commands().is_empty());
}

#[test]
fn recorded_commands_serialize_with_op_tags() {
    let mut surface = RecordingSurface::new();
    surface.begin_path().expect("begin path");
    surface.move_to(1.0, 2.0).expect("move");

    let json = serde_json::to_value(surface.commands()).expect("serialize");
    assert_eq!(json[0]["op"], "begin_path");
    assert_eq!(json[1]["op"], "move_to");
    assert_eq!(json[1]["x"], 1.0);

    let parsed: Vec<DrawCommand> = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed.as_slice(), surface.commands());
}
