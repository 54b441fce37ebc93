use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{LinePoint, try_crossing};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, LineCap, LineJoin};

/// Dash pattern family; the concrete pattern scales with the line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

impl LineDash {
    #[must_use]
    pub fn pattern(self, width: f64) -> SmallVec<[f64; 2]> {
        match self {
            Self::Solid => SmallVec::new(),
            Self::Dotted => smallvec![width, width],
            Self::Dashed => smallvec![2.0 * width, 2.0 * width],
            Self::LargeDashed => smallvec![6.0 * width, 6.0 * width],
            Self::SparseDotted => smallvec![width, 4.0 * width],
        }
    }
}

/// How consecutive samples are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    /// Straight segment between samples.
    #[default]
    Simple,
    /// Horizontal run at the previous value, then a vertical riser.
    WithSteps,
}

/// Part of a rendered segment that leads from `prev` to the threshold line.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSplit {
    /// Vertices to append to the outgoing path; the last one is `crossing`.
    pub lead_in: SmallVec<[LinePoint; 2]>,
    pub crossing: LinePoint,
}

impl LineType {
    /// Vertices appended to a path when advancing from `prev` to `curr`.
    #[must_use]
    pub fn segment_vertices(self, prev: LinePoint, curr: LinePoint) -> SmallVec<[LinePoint; 2]> {
        match self {
            Self::Simple => smallvec![curr],
            Self::WithSteps => smallvec![LinePoint::new(curr.x, prev.y), curr],
        }
    }

    /// Locates where the rendered segment `prev -> curr` meets the threshold.
    ///
    /// Straight segments use linear interpolation; stepped segments cross on
    /// the vertical riser at `curr.x`.
    #[must_use]
    pub fn split_at_threshold(
        self,
        prev: LinePoint,
        curr: LinePoint,
        threshold: f64,
    ) -> Option<ThresholdSplit> {
        let interpolated = try_crossing(prev, curr, threshold)?;
        Some(match self {
            Self::Simple => ThresholdSplit {
                lead_in: smallvec![interpolated],
                crossing: interpolated,
            },
            Self::WithSteps => {
                let crossing = LinePoint::new(curr.x, threshold);
                ThresholdSplit {
                    lead_in: smallvec![LinePoint::new(curr.x, prev.y), crossing],
                    crossing,
                }
            }
        })
    }
}

/// Stroke geometry shared by both bands and the uniform path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    #[serde(default)]
    pub dash: LineDash,
    #[serde(default)]
    pub line_type: LineType,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            dash: LineDash::Solid,
            line_type: LineType::Simple,
        }
    }
}

impl LineStyle {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Writes width, dash pattern, cap and join onto the surface.
    pub fn apply<S: DrawingSurface + ?Sized>(self, surface: &mut S) -> ChartResult<()> {
        surface.set_line_width(self.width)?;
        surface.set_line_dash(&self.dash.pattern(self.width))?;
        surface.set_line_cap(LineCap::Butt)?;
        surface.set_line_join(LineJoin::Miter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_patterns_scale_with_width() {
        assert!(LineDash::Solid.pattern(3.0).is_empty());
        assert_eq!(LineDash::Dashed.pattern(3.0).as_slice(), &[6.0, 6.0]);
        assert_eq!(LineDash::SparseDotted.pattern(2.0).as_slice(), &[2.0, 8.0]);
    }

    #[test]
    fn stepped_crossing_lies_on_riser() {
        let split = LineType::WithSteps
            .split_at_threshold(LinePoint::new(0.0, 5.0), LinePoint::new(10.0, 15.0), 10.0)
            .expect("crossing");
        assert_eq!(split.crossing, LinePoint::new(10.0, 10.0));
        assert_eq!(split.lead_in[0], LinePoint::new(10.0, 5.0));
    }

    #[test]
    fn stepped_segment_emits_horizontal_then_vertical() {
        let vertices =
            LineType::WithSteps.segment_vertices(LinePoint::new(0.0, 1.0), LinePoint::new(4.0, 3.0));
        assert_eq!(
            vertices.as_slice(),
            &[LinePoint::new(4.0, 1.0), LinePoint::new(4.0, 3.0)]
        );
    }
}
