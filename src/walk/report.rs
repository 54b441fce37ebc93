use smallvec::SmallVec;

use crate::core::{Band, LinePoint};

/// Summary of one stroked path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentReport {
    /// Band of the segment, `None` for an undivided (uniform) walk.
    pub band: Option<Band>,
    /// Running extreme `y` at close; topmost `y` for uniform walks.
    pub extreme: f64,
    /// Number of path vertices stroked, crossing points included.
    pub vertex_count: usize,
    pub filled: bool,
}

/// What one walk emitted, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkReport {
    pub crossings: SmallVec<[LinePoint; 4]>,
    pub segments: SmallVec<[SegmentReport; 4]>,
}

impl WalkReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.segments.iter().filter(|segment| segment.filled).count()
    }
}
