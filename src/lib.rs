//! chart-walk: band-splitting path walker for line and area series.
//!
//! Turns a visible range of pixel-space points into stroke and gradient-fill
//! commands on an immediate-mode [`render::DrawingSurface`]. When a series is
//! styled with two bands and a threshold line is known, the walk is split at
//! every threshold crossing and each band segment is filled between its
//! running extreme and the threshold.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod series;
pub mod telemetry;
pub mod walk;

pub use api::SeriesStyleConfig;
pub use error::{ChartError, ChartResult};
pub use walk::{WalkReport, walk_line};
