use serde::{Deserialize, Serialize};

use crate::core::LinePoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FillStyle, LineCap, LineJoin};

/// One call issued against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    SetStrokeStyle { color: Color },
    SetFillStyle { style: FillStyle },
    SetLineWidth { width: f64 },
    SetLineDash { pattern: Vec<f64> },
    SetLineCap { cap: LineCap },
    SetLineJoin { join: LineJoin },
}

/// Snapshot of the path and stroke color at the moment `stroke` was called.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePass {
    pub color: Color,
    pub vertices: Vec<LinePoint>,
}

/// Snapshot of the path and fill style at the moment `fill` was called.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPass {
    pub style: FillStyle,
    pub vertices: Vec<LinePoint>,
    pub closed: bool,
}

/// Headless surface that validates the path protocol and records commands.
///
/// Used by tests, benchmarks and the trace tool. Protocol violations that a
/// canvas would silently tolerate (`line_to` with no current point, painting
/// an empty path) are reported as `ChartError::SurfaceState`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    path: Vec<LinePoint>,
    current_point: Option<LinePoint>,
    subpath_start: Option<LinePoint>,
    closed: bool,
    stroke_color: Option<Color>,
    fill_style: Option<FillStyle>,
    strokes: Vec<StrokePass>,
    fills: Vec<FillPass>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn strokes(&self) -> &[StrokePass] {
        &self.strokes
    }

    #[must_use]
    pub fn fills(&self) -> &[FillPass] {
        &self.fills
    }

    /// Returns `true` when no path is being built.
    #[must_use]
    pub fn is_path_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Drops recorded history while keeping the current path state.
    pub fn clear_history(&mut self) {
        self.commands.clear();
        self.strokes.clear();
        self.fills.clear();
    }

    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    fn push_vertex(&mut self, op: &str, x: f64, y: f64) -> ChartResult<LinePoint> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{op} coordinates must be finite"
            )));
        }
        let point = LinePoint::new(x, y);
        self.path.push(point);
        self.current_point = Some(point);
        Ok(point)
    }

    fn ensure_paintable(&self, op: &str) -> ChartResult<()> {
        if self.path.is_empty() {
            return Err(ChartError::SurfaceState(format!(
                "{op} called with no open path"
            )));
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) -> ChartResult<()> {
        self.path.clear();
        self.current_point = None;
        self.subpath_start = None;
        self.closed = false;
        self.commands.push(DrawCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let point = self.push_vertex("move_to", x, y)?;
        self.subpath_start = Some(point);
        self.closed = false;
        self.commands.push(DrawCommand::MoveTo { x, y });
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if self.current_point.is_none() {
            return Err(ChartError::SurfaceState(
                "line_to called before move_to".to_owned(),
            ));
        }
        self.push_vertex("line_to", x, y)?;
        self.closed = false;
        self.commands.push(DrawCommand::LineTo { x, y });
        Ok(())
    }

    fn close_path(&mut self) -> ChartResult<()> {
        let Some(start) = self.subpath_start else {
            return Err(ChartError::SurfaceState(
                "close_path called with no open sub-path".to_owned(),
            ));
        };
        self.current_point = Some(start);
        self.closed = true;
        self.commands.push(DrawCommand::ClosePath);
        Ok(())
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.ensure_paintable("stroke")?;
        let color = self.stroke_color.unwrap_or(Color::rgb(0.0, 0.0, 0.0));
        self.strokes.push(StrokePass {
            color,
            vertices: self.path.clone(),
        });
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.ensure_paintable("fill")?;
        let style = self
            .fill_style
            .clone()
            .unwrap_or(FillStyle::Solid {
                color: Color::rgb(0.0, 0.0, 0.0),
            });
        self.fills.push(FillPass {
            style,
            vertices: self.path.clone(),
            closed: self.closed,
        });
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.stroke_color = Some(color);
        self.commands.push(DrawCommand::SetStrokeStyle { color });
        Ok(())
    }

    fn set_fill_style(&mut self, style: &FillStyle) -> ChartResult<()> {
        style.validate()?;
        self.fill_style = Some(style.clone());
        self.commands.push(DrawCommand::SetFillStyle {
            style: style.clone(),
        });
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> ChartResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::SetLineWidth { width });
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> ChartResult<()> {
        self.commands.push(DrawCommand::SetLineDash {
            pattern: pattern.to_vec(),
        });
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> ChartResult<()> {
        self.commands.push(DrawCommand::SetLineCap { cap });
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> ChartResult<()> {
        self.commands.push(DrawCommand::SetLineJoin { join });
        Ok(())
    }
}
