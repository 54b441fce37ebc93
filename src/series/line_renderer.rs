use crate::core::{LinePoint, VisibleRange};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, LineStyle, SeriesStyle};
use crate::walk::{WalkReport, reset_path_on_error, walk_line};

use super::{single_point, single_point_band, stroke_tick, tick_color, tick_report};

/// Input for one repaint of a line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesData {
    pub items: Vec<LinePoint>,
    pub visible_range: Option<VisibleRange>,
    pub line: LineStyle,
    pub style: SeriesStyle,
    /// Reference line in pixels (for example the previous close).
    pub threshold: Option<f64>,
    /// Width of the tick drawn for a lone point.
    pub bar_width: f64,
}

/// Draws a line series, split into bands when a threshold is configured.
#[derive(Debug, Default)]
pub struct LineSeriesRenderer {
    data: Option<LineSeriesData>,
}

impl LineSeriesRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, data: LineSeriesData) {
        self.data = Some(data);
    }

    #[must_use]
    pub fn data(&self) -> Option<&LineSeriesData> {
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
    data: &LineSeriesData,
    range: VisibleRange,
) -> ChartResult<WalkReport> {
    if let Some(point) = single_point(&data.items, range) {
        let band = single_point_band(&data.style, data.threshold, point);
        data.line.apply(surface)?;
        stroke_tick(surface, point, data.bar_width, tick_color(&data.style, band))?;
        return Ok(tick_report(point, band, false));
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
    surface.begin_path()?;
    Ok(report)
}
