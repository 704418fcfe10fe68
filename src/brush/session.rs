//! Brush session for collecting the points of one stroke

use crate::core::Result;
use crate::mask::{LabelmapVolume, PixelPoint, SegmentIndex, SliceId};
use crate::render::{BrushRenderer, BrushSurface, PixelToDevice};
use super::config::BrushConfig;
use super::footprint::BrushFootprint;
use super::painter::{BrushMode, MaskPainter, PaintOutcome};

/// Points of an in-progress stroke on one slice.
///
/// Pointer ticks append points; the stroke can be previewed any number of
/// times and is written to the labelmap only on [`BrushSession::commit`].
/// Dropping or clearing the session abandons the stroke.
#[derive(Debug, Clone)]
pub struct BrushSession {
    /// Accumulated stroke points
    points: Vec<PixelPoint>,
    /// Target slice
    slice: SliceId,
    /// Slice dimensions, for clipping stamps
    columns: u32,
    rows: u32,
    /// Active segment
    segment: SegmentIndex,
    /// Paint or erase
    mode: BrushMode,
    /// Stamp laid down by `stamp`
    footprint: BrushFootprint,
}

impl BrushSession {
    /// Start a paint stroke on `slice` with the default footprint
    pub fn new(slice: SliceId, columns: u32, rows: u32, segment: SegmentIndex) -> Self {
        Self {
            points: Vec::new(),
            slice,
            columns,
            rows,
            segment,
            mode: BrushMode::Paint,
            footprint: BrushFootprint::default(),
        }
    }

    /// Start a stroke using the footprint from `config`
    pub fn with_config(slice: SliceId, columns: u32, rows: u32, segment: SegmentIndex, config: &BrushConfig) -> Self {
        let mut session = Self::new(slice, columns, rows, segment);
        session.footprint = BrushFootprint::from_config(config);
        session
    }

    /// Set paint/erase mode for the stroke
    pub fn set_mode(&mut self, mode: BrushMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Replace the stamp footprint
    pub fn set_footprint(&mut self, footprint: BrushFootprint) -> &mut Self {
        self.footprint = footprint;
        self
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn slice(&self) -> SliceId {
        self.slice
    }

    pub fn segment(&self) -> SegmentIndex {
        self.segment
    }

    /// Append already-clipped points from the capture layer
    pub fn push_points<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<PixelPoint>,
    {
        self.points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Append the footprint stamped at `center`, clipped to the slice
    pub fn stamp(&mut self, center: PixelPoint) -> &mut Self {
        let stamped = self.footprint.stamp(center, self.columns, self.rows);
        self.points.extend(stamped);
        self
    }

    /// Get all stroke points
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Abandon the stroke
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Draw the stroke so far without touching the labelmap
    pub fn preview<T, S>(
        &self,
        renderer: &BrushRenderer,
        transform: &T,
        surface: &mut S,
        color: &S::Color,
    ) -> Result<()>
    where
        T: PixelToDevice + ?Sized,
        S: BrushSurface + ?Sized,
    {
        renderer.render_preview(&self.points, transform, surface, color)
    }

    /// Write the stroke into `volume` and reset the session.
    ///
    /// On error the points are kept, so the host can fix the slice and retry.
    pub fn commit(&mut self, painter: &MaskPainter, volume: &mut LabelmapVolume) -> Result<PaintOutcome> {
        let outcome = painter.paint_or_erase(
            &self.points,
            volume,
            self.slice,
            self.segment,
            self.columns,
            self.mode,
        )?;
        self.points.clear();
        Ok(outcome)
    }
}
