//! Path walkers turning a visible point range into surface commands.
//!
//! Every walker expects the caller to have begun an empty path on the
//! surface. `walk_line` picks the band walker when the style is split and a
//! threshold is available for this repaint, otherwise the uniform walker.

mod band_walker;
mod report;
mod uniform_walker;

pub use band_walker::{BandSplitStyle, walk_bands};
pub use report::{SegmentReport, WalkReport};
pub use uniform_walker::walk_uniform;

use tracing::{debug, warn};

use crate::core::{LinePoint, VisibleRange};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, LineStyle, SeriesStyle};

/// Walks `points[range]` with the given stroke geometry and coloring.
///
/// Empty or malformed ranges are a no-op. A non-finite threshold counts as
/// absent.
pub fn walk_line<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    points: &[LinePoint],
    range: VisibleRange,
    line: LineStyle,
    threshold: Option<f64>,
    style: &SeriesStyle,
) -> ChartResult<WalkReport> {
    let Some(visible) = range.slice(points) else {
        debug!(?range, len = points.len(), "skipping walk for empty or malformed range");
        return Ok(WalkReport::default());
    };

    match (style, split_threshold(threshold)) {
        (
            SeriesStyle::Split {
                above, below, ..
            },
            Some(threshold),
        ) => walk_bands(
            surface,
            visible,
            BandSplitStyle {
                threshold,
                line,
                above: *above,
                below: *below,
            },
        ),
        _ => walk_uniform(surface, points, range, line, style.line_color()),
    }
}

/// Clears the surface path when `result` is an error, returning `result` unchanged.
///
/// A failing reset is only logged; the original error wins.
pub(crate) fn reset_path_on_error<S, T>(surface: &mut S, result: ChartResult<T>) -> ChartResult<T>
where
    S: DrawingSurface + ?Sized,
{
    if result.is_err() {
        if let Err(reset_err) = surface.begin_path() {
            warn!(error = %reset_err, "failed to reset surface path after draw error");
        }
    }
    result
}

fn split_threshold(threshold: Option<f64>) -> Option<f64> {
    match threshold {
        Some(value) if value.is_finite() => Some(value),
        Some(value) => {
            debug!(threshold = value, "ignoring non-finite threshold");
            None
        }
        None => None,
    }
}
