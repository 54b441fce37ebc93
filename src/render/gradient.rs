use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::{Color, FillStyle, LinearGradient};

/// Optional two-stop gradient pair used to fill one band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientColor {
    #[serde(default)]
    pub top_color: Option<Color>,
    #[serde(default)]
    pub bottom_color: Option<Color>,
}

impl GradientColor {
    #[must_use]
    pub const fn new(top_color: Color, bottom_color: Color) -> Self {
        Self {
            top_color: Some(top_color),
            bottom_color: Some(bottom_color),
        }
    }

    /// Pair with no stops; bands using it are stroked but never filled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            top_color: None,
            bottom_color: None,
        }
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.top_color.is_some() && self.bottom_color.is_some()
    }

    /// Vertical gradient from `start_y` (top color) to `end_y` (bottom color).
    #[must_use]
    pub fn vertical_fill(self, start_y: f64, end_y: f64) -> Option<FillStyle> {
        make_gradient(0.0, start_y, 0.0, end_y, self.top_color, self.bottom_color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if let Some(color) = self.top_color {
            color.validate()?;
        }
        if let Some(color) = self.bottom_color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Builds a two-stop linear gradient, or `None` ("no fill") when either
/// color is missing.
///
/// A zero-length axis is returned as-is; backends render it as a flat fill.
#[must_use]
pub fn make_gradient(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    top_color: Option<Color>,
    bottom_color: Option<Color>,
) -> Option<FillStyle> {
    let (top, bottom) = (top_color?, bottom_color?);
    let gradient = LinearGradient::new(x0, y0, x1, y1)
        .with_stop(0.0, top)
        .with_stop(1.0, bottom);
    Some(FillStyle::from(gradient))
}
