use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{
    BandStyle, Color, GradientColor, LineDash, LineStyle, LineType, SeriesStyle,
};

/// Color as written in configuration: `"#rrggbb"`, `"#rrggbbaa"` or an
/// explicit channel object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Channels(Color),
}

impl ColorValue {
    pub fn resolve(&self) -> ChartResult<Color> {
        let color = match self {
            Self::Hex(hex) => Color::from_hex(hex)?,
            Self::Channels(color) => *color,
        };
        color.validate()?;
        Ok(color)
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        Self::Channels(color)
    }
}

impl From<&str> for ColorValue {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientConfig {
    #[serde(default)]
    pub top_color: Option<ColorValue>,
    #[serde(default)]
    pub bottom_color: Option<ColorValue>,
}

impl GradientConfig {
    /// Resolves both stops; a missing stop stays missing and disables the fill.
    pub fn resolve(&self) -> ChartResult<GradientColor> {
        Ok(GradientColor {
            top_color: self.top_color.as_ref().map(ColorValue::resolve).transpose()?,
            bottom_color: self
                .bottom_color
                .as_ref()
                .map(ColorValue::resolve)
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub color: ColorValue,
    #[serde(default)]
    pub fill: GradientConfig,
}

impl BandConfig {
    pub fn resolve(&self) -> ChartResult<BandStyle> {
        Ok(BandStyle::new(self.color.resolve()?, self.fill.resolve()?))
    }
}

/// Above/below coloring around the threshold line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandsConfig {
    pub above: BandConfig,
    pub below: BandConfig,
}

/// Serializable per-series style options for line and area series.
///
/// Presence of `bands` selects the split coloring mode; `line_color` is used
/// for undivided walks and whenever a repaint has no threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyleConfig {
    #[serde(default = "default_line_color")]
    pub line_color: ColorValue,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub line_dash: LineDash,
    #[serde(default)]
    pub line_type: LineType,
    #[serde(default)]
    pub bands: Option<BandsConfig>,
    #[serde(default = "default_area_top_color")]
    pub top_color: Option<ColorValue>,
    #[serde(default = "default_area_bottom_color")]
    pub bottom_color: Option<ColorValue>,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
}

impl Default for SeriesStyleConfig {
    fn default() -> Self {
        Self {
            line_color: default_line_color(),
            line_width: default_line_width(),
            line_dash: LineDash::default(),
            line_type: LineType::default(),
            bands: None,
            top_color: default_area_top_color(),
            bottom_color: default_area_bottom_color(),
            bar_width: default_bar_width(),
        }
    }
}

impl SeriesStyleConfig {
    #[must_use]
    pub fn with_bands(mut self, above: BandConfig, below: BandConfig) -> Self {
        self.bands = Some(BandsConfig { above, below });
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidData(format!("invalid series style json: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| {
            ChartError::InvalidData(format!("failed to serialize series style: {err}"))
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.line_style().validate()?;
        if !self.bar_width.is_finite() || self.bar_width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and >= 0".to_owned(),
            ));
        }
        self.to_series_style()?;
        self.area_fill()?;
        Ok(())
    }

    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        LineStyle::new(self.line_width)
            .with_dash(self.line_dash)
            .with_line_type(self.line_type)
    }

    pub fn to_series_style(&self) -> ChartResult<SeriesStyle> {
        let color = self.line_color.resolve()?;
        Ok(match &self.bands {
            None => SeriesStyle::uniform(color),
            Some(bands) => {
                SeriesStyle::split(color, bands.above.resolve()?, bands.below.resolve()?)
            }
        })
    }

    /// Gradient of the undivided area fill.
    pub fn area_fill(&self) -> ChartResult<GradientColor> {
        GradientConfig {
            top_color: self.top_color.clone(),
            bottom_color: self.bottom_color.clone(),
        }
        .resolve()
    }
}

fn default_line_color() -> ColorValue {
    ColorValue::from("#2196f3")
}

fn default_line_width() -> f64 {
    3.0
}

fn default_area_top_color() -> Option<ColorValue> {
    Some(ColorValue::from("#2196f366"))
}

fn default_area_bottom_color() -> Option<ColorValue> {
    Some(ColorValue::from("#2196f300"))
}

fn default_bar_width() -> f64 {
    6.0
}
