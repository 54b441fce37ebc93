use serde::{Deserialize, Serialize};

/// Point in device-pixel space produced by the coordinate-scaling layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

impl LinePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Half-open index window `[from, to)` into a point sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Range covering every item of a sequence with `len` items.
    #[must_use]
    pub const fn full(len: usize) -> Self {
        Self { from: 0, to: len }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when `from <= to <= len`.
    #[must_use]
    pub const fn fits(self, len: usize) -> bool {
        self.from <= self.to && self.to <= len
    }

    /// Returns the points covered by this range, or `None` when the range is
    /// malformed or empty for the given sequence.
    #[must_use]
    pub fn slice(self, points: &[LinePoint]) -> Option<&[LinePoint]> {
        if !self.fits(points.len()) || self.is_empty() {
            return None;
        }
        Some(&points[self.from..self.to])
    }
}
