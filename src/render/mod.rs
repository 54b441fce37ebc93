mod gradient;
mod line_style;
mod primitives;
mod recording_surface;
mod series_style;

pub use gradient::{GradientColor, make_gradient};
pub use line_style::{LineDash, LineStyle, LineType, ThresholdSplit};
pub use primitives::{Color, FillStyle, GradientStop, LineCap, LineJoin, LinearGradient};
pub use recording_surface::{DrawCommand, FillPass, RecordingSurface, StrokePass};
pub use series_style::{BandStyle, SeriesStyle};

use crate::error::ChartResult;

/// Immediate-mode path drawing capability targeted by every walker.
///
/// Semantics follow an HTML canvas context: `stroke` and `fill` paint the
/// current path without consuming it, and only `begin_path` clears it.
/// Walkers only ever write styles; nothing here reads state back.
pub trait DrawingSurface {
    fn begin_path(&mut self) -> ChartResult<()>;
    fn move_to(&mut self, x: f64, y: f64) -> ChartResult<()>;
    fn line_to(&mut self, x: f64, y: f64) -> ChartResult<()>;
    fn close_path(&mut self) -> ChartResult<()>;
    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;

    fn set_stroke_style(&mut self, color: Color) -> ChartResult<()>;
    fn set_fill_style(&mut self, style: &FillStyle) -> ChartResult<()>;
    fn set_line_width(&mut self, width: f64) -> ChartResult<()>;
    fn set_line_dash(&mut self, pattern: &[f64]) -> ChartResult<()>;
    fn set_line_cap(&mut self, cap: LineCap) -> ChartResult<()>;
    fn set_line_join(&mut self, join: LineJoin) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
