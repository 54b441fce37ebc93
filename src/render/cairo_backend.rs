use cairo::Context;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, FillStyle, LineCap, LineJoin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub strokes: usize,
    pub fills: usize,
    pub gradient_fills: usize,
}

/// `DrawingSurface` adapter over a borrowed Cairo context, for example the
/// one handed to a GTK `DrawingArea` draw callback.
///
/// Cairo shares one source between stroke and fill and consumes the path on
/// paint, so the adapter keeps both styles itself and paints with the
/// `*_preserve` variants to match canvas semantics.
#[derive(Debug)]
pub struct CairoSurface<'a> {
    context: &'a Context,
    stroke_color: Color,
    fill_style: FillStyle,
    path_len: usize,
    stats: CairoSurfaceStats,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            stroke_color: Color::rgb(0.0, 0.0, 0.0),
            fill_style: FillStyle::from(Color::rgb(0.0, 0.0, 0.0)),
            path_len: 0,
            stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }

    fn ensure_paintable(&self, op: &str) -> ChartResult<()> {
        if self.path_len == 0 {
            return Err(ChartError::SurfaceState(format!(
                "{op} called with no open path"
            )));
        }
        Ok(())
    }

    fn apply_fill_source(&mut self) -> ChartResult<()> {
        match &self.fill_style {
            FillStyle::Solid { color } => apply_color(self.context, *color),
            FillStyle::Gradient { gradient } => {
                let pattern =
                    cairo::LinearGradient::new(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
                for stop in &gradient.stops {
                    pattern.add_color_stop_rgba(
                        stop.offset,
                        stop.color.red,
                        stop.color.green,
                        stop.color.blue,
                        stop.color.alpha,
                    );
                }
                self.context
                    .set_source(&pattern)
                    .map_err(|err| map_backend_error("failed to set gradient source", err))?;
                self.stats.gradient_fills += 1;
            }
        }
        Ok(())
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn begin_path(&mut self) -> ChartResult<()> {
        self.context.new_path();
        self.path_len = 0;
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> ChartResult<()> {
        self.context.move_to(x, y);
        self.path_len += 1;
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if self.path_len == 0 {
            return Err(ChartError::SurfaceState(
                "line_to called before move_to".to_owned(),
            ));
        }
        self.context.line_to(x, y);
        self.path_len += 1;
        Ok(())
    }

    fn close_path(&mut self) -> ChartResult<()> {
        if self.path_len == 0 {
            return Err(ChartError::SurfaceState(
                "close_path called with no open sub-path".to_owned(),
            ));
        }
        self.context.close_path();
        Ok(())
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.ensure_paintable("stroke")?;
        apply_color(self.context, self.stroke_color);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
        self.stats.strokes += 1;
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.ensure_paintable("fill")?;
        self.apply_fill_source()?;
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))?;
        self.stats.fills += 1;
        Ok(())
    }

    fn set_stroke_style(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.stroke_color = color;
        Ok(())
    }

    fn set_fill_style(&mut self, style: &FillStyle) -> ChartResult<()> {
        style.validate()?;
        self.fill_style = style.clone();
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> ChartResult<()> {
        self.context.set_line_width(width);
        Ok(())
    }

    fn set_line_dash(&mut self, pattern: &[f64]) -> ChartResult<()> {
        self.context.set_dash(pattern, 0.0);
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> ChartResult<()> {
        self.context.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
        Ok(())
    }

    fn set_line_join(&mut self, join: LineJoin) -> ChartResult<()> {
        self.context.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
