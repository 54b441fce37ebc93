//! Series-level renderers that own the surface protocol around a walk.
//!
//! They handle what the walkers deliberately do not: the single-point tick,
//! beginning and clearing the path, and the undivided area fill.

mod area_renderer;
mod line_renderer;

pub use area_renderer::{AreaSeriesData, AreaSeriesRenderer};
pub use line_renderer::{LineSeriesData, LineSeriesRenderer};

use crate::core::{Band, LinePoint, VisibleRange};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, SeriesStyle};
use crate::walk::{SegmentReport, WalkReport};

/// Returns the lone point to draw as a tick, if the series or range holds exactly one.
fn single_point(items: &[LinePoint], range: VisibleRange) -> Option<LinePoint> {
    if items.len() == 1 {
        return items.first().copied();
    }
    if range.len() == 1 && range.fits(items.len()) {
        return Some(items[range.from]);
    }
    None
}

/// Band the single point falls into, when the style splits and a threshold is known.
fn single_point_band(style: &SeriesStyle, threshold: Option<f64>, point: LinePoint) -> Option<Band> {
    match (style, threshold) {
        (SeriesStyle::Split { .. }, Some(threshold)) if threshold.is_finite() => {
            Some(Band::of_point(point, threshold))
        }
        _ => None,
    }
}

fn tick_color(style: &SeriesStyle, band: Option<Band>) -> Color {
    band.and_then(|band| style.band(band))
        .map_or_else(|| style.line_color(), |band_style| band_style.color)
}

/// Strokes a horizontal tick of `bar_width` centred on `point` and clears the path.
fn stroke_tick<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    point: LinePoint,
    bar_width: f64,
    color: Color,
) -> ChartResult<()> {
    let half = bar_width / 2.0;
    surface.begin_path()?;
    surface.move_to(point.x - half, point.y)?;
    surface.line_to(point.x + half, point.y)?;
    surface.set_stroke_style(color)?;
    surface.stroke()?;
    surface.begin_path()
}

fn tick_report(point: LinePoint, band: Option<Band>, filled: bool) -> WalkReport {
    let mut report = WalkReport::default();
    report.segments.push(SegmentReport {
        band,
        extreme: point.y,
        vertex_count: 2,
        filled,
    });
    report
}
