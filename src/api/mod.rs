//! Host-facing configuration for line/area series styling.

mod series_style_config;

pub use series_style_config::{
    BandConfig, BandsConfig, ColorValue, GradientConfig, SeriesStyleConfig,
};
