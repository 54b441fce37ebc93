use tracing::trace;

use crate::core::{LinePoint, VisibleRange};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, GradientColor, LineStyle, SeriesStyle};
use crate::walk::{WalkReport, reset_path_on_error, walk_line};

use super::{single_point, single_point_band, stroke_tick, tick_color, tick_report};

/// Input for one repaint of an area series.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSeriesData {
    pub items: Vec<LinePoint>,
    pub visible_range: Option<VisibleRange>,
    pub line: LineStyle,
    pub style: SeriesStyle,
    pub threshold: Option<f64>,
    /// Gradient of the undivided area, used when no band split applies.
    pub fill: GradientColor,
    /// Pixel `y` the undivided area is closed down to.
    pub bottom: f64,
    pub bar_width: f64,
}

/// Draws an area series: per-band gradient fills when split by a threshold,
/// otherwise the stroked line closed down to `bottom` with one gradient.
#[derive(Debug, Default)]
pub struct AreaSeriesRenderer {
    data: Option<AreaSeriesData>,
}

impl AreaSeriesRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: AreaSeriesData) {
        self.data = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&AreaSeriesData> {
        self.data.as_ref()
    }

    /// Issues this repaint's commands; the surface path is empty afterwards.
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<WalkReport> {
        let Some(data) = &self.data else {
            return Ok(WalkReport::default());
        };
        let Some(range) = data.visible_range else {
            return Ok(WalkReport::default());
        };
        if data.items.is_empty() {
            return Ok(WalkReport::default());
        }

        let result = draw_visible(surface, data, range);
        reset_path_on_error(surface, result)
    }
}

fn draw_visible<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    data: &AreaSeriesData,
    range: VisibleRange,
) -> ChartResult<WalkReport> {
    if let Some(point) = single_point(&data.items, range) {
        return draw_single_point(surface, data, point);
    }

    surface.begin_path()?;
    let report = walk_line(
        surface,
        &data.items,
        range,
        data.line,
        data.threshold,
        &data.style,
    )?;

    // Band walks fill per segment and leave an empty path; only the
    // undivided walk is closed down to the bottom here.
    let uniform_top = match report.segments.as_slice() {
        [segment] if segment.band.is_none() => Some(segment.extreme),
        _ => None,
    };
    let (Some(top), Some(visible)) = (uniform_top, range.slice(&data.items)) else {
        surface.begin_path()?;
        return Ok(report);
    };

    let mut report = report;
    if let Some(fill) = data.fill.vertical_fill(top, data.bottom) {
        let (first, last) = (visible[0], visible[visible.len() - 1]);
        surface.line_to(last.x, data.bottom)?;
        surface.line_to(first.x, data.bottom)?;
        surface.close_path()?;
        surface.set_fill_style(&fill)?;
        surface.fill()?;
        trace!(top, bottom = data.bottom, "filled undivided area");
        if let Some(segment) = report.segments.first_mut() {
            segment.filled = true;
        }
    }
    surface.begin_path()?;
    Ok(report)
}

fn draw_single_point<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    data: &AreaSeriesData,
    point: LinePoint,
) -> ChartResult<WalkReport> {
    let band = single_point_band(&data.style, data.threshold, point);
    let (base, fill) = match (band.and_then(|band| data.style.band(band)), data.threshold) {
        (Some(band_style), Some(threshold)) => {
            (threshold, band_style.fill.vertical_fill(point.y, threshold))
        }
        _ => (data.bottom, data.fill.vertical_fill(point.y, data.bottom)),
    };

    data.line.apply(surface)?;
    let filled = fill.is_some();
    if let Some(fill) = fill {
        let half = data.bar_width / 2.0;
        surface.begin_path()?;
        surface.move_to(point.x - half, base)?;
        surface.line_to(point.x - half, point.y)?;
        surface.line_to(point.x + half, point.y)?;
        surface.line_to(point.x + half, base)?;
        surface.close_path()?;
        surface.set_fill_style(&fill)?;
        surface.fill()?;
    }
    stroke_tick(surface, point, data.bar_width, tick_color(&data.style, band))?;
    Ok(tick_report(point, band, filled))
}
