use serde::{Deserialize, Serialize};

use crate::core::Band;
use crate::error::ChartResult;
use crate::render::{Color, GradientColor};

/// Stroke color and optional gradient fill of one band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandStyle {
    pub color: Color,
    #[serde(default)]
    pub fill: GradientColor,
}

impl BandStyle {
    #[must_use]
    pub const fn new(color: Color, fill: GradientColor) -> Self {
        Self { color, fill }
    }

    #[must_use]
    pub const fn stroke_only(color: Color) -> Self {
        Self {
            color,
            fill: GradientColor::none(),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.color.validate()?;
        self.fill.validate()
    }
}

/// Coloring mode of a line/area series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SeriesStyle {
    /// Single color for the whole series.
    Uniform { color: Color },
    /// Two bands around a threshold. `color` strokes the series whenever no
    /// threshold is available for a repaint.
    Split {
        color: Color,
        above: BandStyle,
        below: BandStyle,
    },
}

impl SeriesStyle {
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self::Uniform { color }
    }

    #[must_use]
    pub const fn split(color: Color, above: BandStyle, below: BandStyle) -> Self {
        Self::Split {
            color,
            above,
            below,
        }
    }

    /// Color used when the series is drawn as one undivided path.
    #[must_use]
    pub const fn line_color(&self) -> Color {
        match self {
            Self::Uniform { color } | Self::Split { color, .. } => *color,
        }
    }

    #[must_use]
    pub const fn band(&self, band: Band) -> Option<BandStyle> {
        match (self, band) {
            (Self::Uniform { .. }, _) => None,
            (Self::Split { above, .. }, Band::Above) => Some(*above),
            (Self::Split { below, .. }, Band::Below) => Some(*below),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Uniform { color } => color.validate(),
            Self::Split {
                color,
                above,
                below,
            } => {
                color.validate()?;
                above.validate()?;
                below.validate()
            }
        }
    }
}
