use tracing::debug;

use crate::core::{LinePoint, VisibleRange};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, LineStyle};
use crate::walk::{SegmentReport, WalkReport, reset_path_on_error};

/// Strokes the visible points as one continuous path in a single color.
///
/// Expects the caller to have begun a path. The path is left in place after
/// the stroke so area callers can close it down to their baseline and fill
/// it; nothing is filled here. On error the path is reset before returning.
pub fn walk_uniform<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    points: &[LinePoint],
    range: VisibleRange,
    line: LineStyle,
    color: Color,
) -> ChartResult<WalkReport> {
    let Some(visible) = range.slice(points) else {
        debug!(?range, len = points.len(), "skipping uniform walk for empty or malformed range");
        return Ok(WalkReport::default());
    };

    let result = stroke_visible(surface, visible, line, color);
    reset_path_on_error(surface, result)
}

fn stroke_visible<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    visible: &[LinePoint],
    line: LineStyle,
    color: Color,
) -> ChartResult<WalkReport> {
    line.apply(surface)?;
    surface.set_stroke_style(color)?;

    let first = visible[0];
    surface.move_to(first.x, first.y)?;
    let mut vertex_count = 1;
    let mut topmost = first.y;

    for pair in visible.windows(2) {
        for vertex in line.line_type.segment_vertices(pair[0], pair[1]) {
            surface.line_to(vertex.x, vertex.y)?;
            vertex_count += 1;
        }
        topmost = topmost.min(pair[1].y);
    }

    surface.stroke()?;
    debug!(points = visible.len(), vertex_count, "uniform walk stroked");

    let mut report = WalkReport::default();
    report.segments.push(SegmentReport {
        band: None,
        extreme: topmost,
        vertex_count,
        filled: false,
    });
    Ok(report)
}
