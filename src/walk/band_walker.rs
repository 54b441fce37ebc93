use tracing::{debug, trace, warn};

use crate::core::{Band, LinePoint, RunningExtreme};
use crate::error::{ChartError, ChartResult};
use crate::render::{BandStyle, DrawingSurface, FillStyle, LineStyle};
use crate::walk::{SegmentReport, WalkReport, reset_path_on_error};

/// Bands, threshold and stroke geometry for one split walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSplitStyle {
    pub threshold: f64,
    pub line: LineStyle,
    pub above: BandStyle,
    pub below: BandStyle,
}

impl BandSplitStyle {
    #[must_use]
    pub const fn band(&self, band: Band) -> BandStyle {
        match band {
            Band::Above => self.above,
            Band::Below => self.below,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathState {
    NoBandOpen,
    BandOpen { extreme: RunningExtreme },
}

/// Walks points as a sequence of band segments split at threshold crossings.
///
/// Exactly one band segment is open at any time. Every crossing strokes and
/// (when the band has a complete gradient pair) fills the outgoing segment,
/// then opens the next segment at the crossing point. The fill polygon is the
/// stroked vertices dropped onto the threshold line at both ends.
struct BandWalker<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
    style: BandSplitStyle,
    state: PathState,
    vertices: Vec<LinePoint>,
    report: WalkReport,
}

impl<'s, S: DrawingSurface + ?Sized> BandWalker<'s, S> {
    fn new(surface: &'s mut S, style: BandSplitStyle) -> Self {
        Self {
            surface,
            style,
            state: PathState::NoBandOpen,
            vertices: Vec::new(),
            report: WalkReport::default(),
        }
    }

    fn run(&mut self, visible: &[LinePoint]) -> ChartResult<()> {
        let threshold = self.style.threshold;
        let line_type = self.style.line.line_type;
        self.style.line.apply(&mut *self.surface)?;

        let first = visible[0];
        self.open(Band::of_point(first, threshold), first, first.y)?;

        for pair in visible.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            match line_type.split_at_threshold(prev, curr, threshold) {
                Some(split) => {
                    for vertex in split.lead_in {
                        self.extend(vertex)?;
                    }
                    self.close()?;
                    trace!(x = split.crossing.x, y = split.crossing.y, "band crossing");
                    self.report.crossings.push(split.crossing);
                    self.open(Band::of_point(curr, threshold), split.crossing, curr.y)?;
                    self.extend(curr)?;
                }
                None => {
                    if Band::of_point(prev, threshold) != Band::of_point(curr, threshold) {
                        // Unreachable for finite input: equal `y` values classify alike.
                        warn!(
                            prev_y = prev.y,
                            curr_y = curr.y,
                            threshold,
                            "degenerate crossing drawn without a split"
                        );
                    }
                    for vertex in line_type.segment_vertices(prev, curr) {
                        self.extend(vertex)?;
                    }
                    self.observe(curr.y);
                }
            }
        }

        self.close()
    }

    fn open(&mut self, band: Band, start: LinePoint, extreme_seed: f64) -> ChartResult<()> {
        if let PathState::BandOpen { extreme } = self.state {
            return Err(ChartError::SurfaceState(format!(
                "cannot open {band:?} segment while {:?} segment is open",
                extreme.band()
            )));
        }
        self.surface.move_to(start.x, start.y)?;
        self.vertices.clear();
        self.vertices.push(start);
        self.state = PathState::BandOpen {
            extreme: RunningExtreme::start(band, extreme_seed),
        };
        Ok(())
    }

    fn extend(&mut self, vertex: LinePoint) -> ChartResult<()> {
        self.surface.line_to(vertex.x, vertex.y)?;
        self.vertices.push(vertex);
        Ok(())
    }

    fn observe(&mut self, y: f64) {
        if let PathState::BandOpen { extreme } = &mut self.state {
            extreme.observe(y);
        }
    }

    fn close(&mut self) -> ChartResult<()> {
        let PathState::BandOpen { extreme } = self.state else {
            return Err(ChartError::SurfaceState(
                "no band segment is open".to_owned(),
            ));
        };
        let band_style = self.style.band(extreme.band());

        self.surface.set_stroke_style(band_style.color)?;
        self.surface.stroke()?;

        let fill = band_style
            .fill
            .vertical_fill(extreme.y(), self.style.threshold);
        let filled = fill.is_some();
        if let Some(fill) = fill {
            self.fill_polygon(&fill)?;
        }

        self.surface.begin_path()?;
        self.state = PathState::NoBandOpen;
        self.report.segments.push(SegmentReport {
            band: Some(extreme.band()),
            extreme: extreme.y(),
            vertex_count: self.vertices.len(),
            filled,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, fill: &FillStyle) -> ChartResult<()> {
        let threshold = self.style.threshold;
        let (Some(first), Some(last)) = (self.vertices.first(), self.vertices.last()) else {
            return Ok(());
        };
        let (first_x, last_x) = (first.x, last.x);

        self.surface.begin_path()?;
        self.surface.move_to(first_x, threshold)?;
        for vertex in &self.vertices {
            self.surface.line_to(vertex.x, vertex.y)?;
        }
        self.surface.line_to(last_x, threshold)?;
        self.surface.close_path()?;
        self.surface.set_fill_style(fill)?;
        self.surface.fill()
    }
}

/// Strokes and fills `visible` as threshold-split band segments.
///
/// The caller must have begun a path. On return (successful or not) the
/// surface path has been reset with `begin_path`.
pub fn walk_bands<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    visible: &[LinePoint],
    style: BandSplitStyle,
) -> ChartResult<WalkReport> {
    if visible.is_empty() {
        return Ok(WalkReport::default());
    }

    let mut walker = BandWalker::new(surface, style);
    let result = walker.run(visible).map(|()| walker.report);
    let report = reset_path_on_error(surface, result)?;
    debug!(
        points = visible.len(),
        crossings = report.crossings.len(),
        segments = report.segments.len(),
        fills = report.fill_count(),
        "band walk finished"
    );
    Ok(report)
}
