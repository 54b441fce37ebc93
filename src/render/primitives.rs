use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "color `{hex}` must be `#rrggbb` or `#rrggbbaa`"
            )));
        }

        let channel = |index: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("color `{hex}` is not valid hex")))
        };

        let alpha = if digits.len() == 8 { channel(3)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One color stop of a linear gradient, `offset` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Linear gradient along the segment `(x0, y0) -> (x1, y1)`.
///
/// This is a plain value: surfaces translate it into their native gradient
/// object when it is installed as a fill style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: SmallVec<[GradientStop; 2]>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: SmallVec::new(),
        }
    }

    pub fn add_stop(&mut self, offset: f64, color: Color) {
        self.stops.push(GradientStop { offset, color });
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_stop(offset, color);
        self
    }
}

/// Paint source installed with `DrawingSurface::set_fill_style`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FillStyle {
    Solid { color: Color },
    Gradient { gradient: LinearGradient },
}

impl FillStyle {
    /// Validates the solid color or every gradient stop color.
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Solid { color } => color.validate(),
            Self::Gradient { gradient } => gradient
                .stops
                .iter()
                .try_for_each(|stop| stop.color.validate()),
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        Self::Solid { color }
    }
}

impl From<LinearGradient> for FillStyle {
    fn from(gradient: LinearGradient) -> Self {
        Self::Gradient { gradient }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}
