use crate::core::{Band, LinePoint};

/// Point on segment `prev -> curr` whose `y` equals `threshold`.
///
/// Callers must pass points on opposite sides of the threshold; with equal
/// `y` values the division is undefined, see [`try_crossing`] for the
/// guarded form.
#[must_use]
pub fn interpolate_crossing(prev: LinePoint, curr: LinePoint, threshold: f64) -> LinePoint {
    let ratio = (threshold - prev.y) / (curr.y - prev.y);
    LinePoint::new(prev.x + ratio * (curr.x - prev.x), threshold)
}

/// Returns the threshold crossing between two consecutive points, if any.
///
/// Yields `None` when both points classify into the same band, and also for
/// the degenerate case of a zero or non-finite vertical span. The latter
/// cannot happen for finite inputs: equal `y` values always classify alike.
#[must_use]
pub fn try_crossing(prev: LinePoint, curr: LinePoint, threshold: f64) -> Option<LinePoint> {
    if Band::of_point(prev, threshold) == Band::of_point(curr, threshold) {
        return None;
    }
    let span = curr.y - prev.y;
    if span == 0.0 || !span.is_finite() {
        return None;
    }
    let point = interpolate_crossing(prev, curr, threshold);
    point.x.is_finite().then_some(point)
}
