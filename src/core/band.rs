use serde::{Deserialize, Serialize};

use crate::core::LinePoint;

/// Color region of a threshold-split series.
///
/// Pixel `y` grows downward, so "above" the reference line means a smaller
/// `y` than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    Above,
    Below,
}

impl Band {
    /// Classifies a pixel `y` against the threshold.
    ///
    /// Values exactly on the threshold always resolve to `Above`, so a run of
    /// threshold-equal points never produces a crossing.
    #[must_use]
    pub fn of_y(y: f64, threshold: f64) -> Self {
        if y > threshold { Self::Below } else { Self::Above }
    }

    #[must_use]
    pub fn of_point(point: LinePoint, threshold: f64) -> Self {
        Self::of_y(point.y, threshold)
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

/// Most extreme `y` seen in the currently open band segment.
///
/// `Above` tracks the minimum `y` (topmost pixel), `Below` the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningExtreme {
    band: Band,
    y: f64,
}

impl RunningExtreme {
    #[must_use]
    pub const fn start(band: Band, y: f64) -> Self {
        Self { band, y }
    }

    pub fn observe(&mut self, y: f64) {
        self.y = match self.band {
            Band::Above => self.y.min(y),
            Band::Below => self.y.max(y),
        };
    }

    #[must_use]
    pub const fn band(self) -> Band {
        self.band
    }

    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }
}
