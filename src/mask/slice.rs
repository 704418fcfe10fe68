//! Single-slice labelmap buffer

use crate::core::{Error, Result};
use super::{PixelPoint, SegmentIndex};

/// Dense labelmap for one 2D slice.
///
/// `pixels.len() == columns * rows` for the lifetime of the slice. The
/// `invalidated` flag is raised by every brush pass and stays raised until
/// the renderer acknowledges it with [`SliceLabelmap::mark_rendered`].
#[derive(Clone, Debug, PartialEq)]
pub struct SliceLabelmap {
    pixels: Vec<u16>,
    columns: u32,
    rows: u32,
    invalidated: bool,
}

impl SliceLabelmap {
    /// Create an all-unlabeled slice.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            pixels: vec![0; columns as usize * rows as usize],
            columns,
            rows,
            invalidated: false,
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_pixels(pixels: Vec<u16>, columns: u32, rows: u32) -> Result<Self> {
        if pixels.len() != columns as usize * rows as usize {
            return Err(Error::BufferShape { len: pixels.len(), columns, rows });
        }
        Ok(Self { pixels, columns, rows, invalidated: false })
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Raw row-major segment values.
    #[inline]
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pixels
    }

    /// Pixel buffer as bytes (native endian), for texture uploads.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Linear buffer index of `point`, or None if it lies outside the slice.
    #[inline]
    pub fn index_of(&self, point: PixelPoint) -> Option<usize> {
        if point.x < self.columns && point.y < self.rows {
            Some(point.y as usize * self.columns as usize + point.x as usize)
        } else {
            None
        }
    }

    /// Segment at `point`, or None if it lies outside the slice.
    pub fn get(&self, point: PixelPoint) -> Option<SegmentIndex> {
        self.index_of(point).map(|i| SegmentIndex(self.pixels[i]))
    }

    #[inline]
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Called by the renderer once it has re-rasterized this slice.
    pub fn mark_rendered(&mut self) {
        self.invalidated = false;
    }

    /// True if no pixel carries a label.
    pub fn is_empty(&self) -> bool {
        self.pixels.iter().all(|&v| v == 0)
    }

    /// Number of pixels labeled with `segment`.
    pub fn count_segment(&self, segment: SegmentIndex) -> usize {
        self.pixels.iter().filter(|&&v| v == segment.0).count()
    }
}
