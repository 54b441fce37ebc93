pub mod band;
pub mod crossing;
pub mod types;

pub use band::{Band, RunningExtreme};
pub use crossing::{interpolate_crossing, try_crossing};
pub use types::{LinePoint, VisibleRange};
