//! Commits brush points into a slice labelmap.

use crate::core::{Error, Result};
use crate::mask::{LabelmapVolume, PixelPoint, SegmentIndex, SliceId};
use super::config::BrushConfig;

/// Whether a pass writes the active segment or removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    #[default]
    Paint, // Overwrite any existing label
    Erase, // Clear pixels owned by the active segment only
}

/// Summary of one painter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintOutcome {
    /// Points processed, duplicates included
    pub processed: usize,
    /// Pixel writes that changed a value
    pub changed: usize,
    /// The slice was emptied by an erase and dropped from the volume
    pub reclaimed: bool,
}

/// Applies point sets to labelmap slices.
///
/// Holds no state besides its configuration; each call works on the
/// caller's volume.
#[derive(Debug, Clone, Default)]
pub struct MaskPainter {
    config: BrushConfig,
}

impl MaskPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BrushConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrushConfig {
        &self.config
    }

    /// Paint or erase `points` on slice `slice_id` of `volume`.
    ///
    /// Points are linearized as `y * columns + x`. Every point is validated
    /// before the first write, so a rejected call leaves the volume untouched.
    /// Paint overwrites whatever label a pixel held. Erase resets a pixel to 0
    /// only when it holds `segment`. The slice's invalidated flag is raised
    /// whenever points were processed, and a slice left empty by an erase is
    /// removed from the volume after the pass.
    pub fn paint_or_erase(
        &self,
        points: &[PixelPoint],
        volume: &mut LabelmapVolume,
        slice_id: SliceId,
        segment: SegmentIndex,
        columns: u32,
        mode: BrushMode,
    ) -> Result<PaintOutcome> {
        if points.is_empty() {
            return Ok(PaintOutcome::default());
        }
        if mode == BrushMode::Paint && segment.is_none() {
            return Err(Error::ReservedSegment);
        }

        let slice = volume
            .slice_mut(slice_id)
            .ok_or(Error::SliceNotFound { slice: slice_id })?;
        if slice.columns() != columns {
            return Err(Error::ColumnMismatch { expected: slice.columns(), actual: columns });
        }
        let rows = slice.rows();
        if let Some(p) = points.iter().find(|p| p.x >= columns || p.y >= rows) {
            return Err(Error::PointOutOfBounds { x: p.x, y: p.y, columns, rows });
        }

        let pixels = slice.pixels_mut();
        let changed = match mode {
            BrushMode::Paint => paint_pixels(pixels, points, columns, segment),
            BrushMode::Erase => erase_pixels(pixels, points, columns, segment),
        };

        if changed > 0 || self.config.invalidate_unchanged {
            slice.invalidate();
        }

        // Reclaim after the pass, never while the slice is borrowed
        let reclaimed = mode == BrushMode::Erase
            && self.config.reclaim_empty_slices
            && slice.is_empty();
        if reclaimed {
            volume.remove_slice(slice_id);
            log::trace!("slice {slice_id} emptied by erase, reclaimed");
        }

        log::debug!(
            "{:?} segment {} on slice {}: {} points, {} changed",
            mode, segment.0, slice_id, points.len(), changed
        );

        Ok(PaintOutcome { processed: points.len(), changed, reclaimed })
    }

    /// Paint pass (`BrushMode::Paint`).
    pub fn paint(
        &self,
        points: &[PixelPoint],
        volume: &mut LabelmapVolume,
        slice_id: SliceId,
        segment: SegmentIndex,
        columns: u32,
    ) -> Result<PaintOutcome> {
        self.paint_or_erase(points, volume, slice_id, segment, columns, BrushMode::Paint)
    }

    /// Erase pass (`BrushMode::Erase`).
    pub fn erase(
        &self,
        points: &[PixelPoint],
        volume: &mut LabelmapVolume,
        slice_id: SliceId,
        segment: SegmentIndex,
        columns: u32,
    ) -> Result<PaintOutcome> {
        self.paint_or_erase(points, volume, slice_id, segment, columns, BrushMode::Erase)
    }
}

#[inline]
fn linear_index(point: &PixelPoint, columns: u32) -> usize {
    point.y as usize * columns as usize + point.x as usize
}

fn paint_pixels(pixels: &mut [u16], points: &[PixelPoint], columns: u32, segment: SegmentIndex) -> usize {
    let mut changed = 0;
    for point in points {
        let px = &mut pixels[linear_index(point, columns)];
        if *px != segment.0 {
            *px = segment.0;
            changed += 1;
        }
    }
    changed
}

fn erase_pixels(pixels: &mut [u16], points: &[PixelPoint], columns: u32, segment: SegmentIndex) -> usize {
    let mut changed = 0;
    for point in points {
        let px = &mut pixels[linear_index(point, columns)];
        if *px == segment.0 && *px != 0 {
            *px = 0;
            changed += 1;
        }
    }
    changed
}
