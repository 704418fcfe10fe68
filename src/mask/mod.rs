//! Labelmap masks: per-slice segment buffers of a 3D labelmap volume.
//!
//! Each slice is a dense row-major buffer of segment indices, one entry per
//! image pixel. Slices are stored sparsely in a [`LabelmapVolume`]: a slice
//! that holds no labels at all is not kept around.

pub mod slice;
pub mod volume;

pub use slice::SliceLabelmap;
pub use volume::LabelmapVolume;

use std::fmt;

use glam::UVec2;

/// Segment identifier stored in a labelmap pixel.
///
/// `SegmentIndex::NONE` (0) marks an unlabeled pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SegmentIndex(pub u16);

impl SegmentIndex {
    pub const NONE: Self = Self(0);

    /// Returns true for the reserved "no label" value.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl From<u16> for SegmentIndex {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// Position of a slice within the volume (the host's image index).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SliceId(pub usize);

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer pixel coordinate, 0-indexed from the top-left of the slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for PixelPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<[u32; 2]> for PixelPoint {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<UVec2> for PixelPoint {
    fn from(v: UVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<PixelPoint> for UVec2 {
    fn from(p: PixelPoint) -> Self {
        UVec2::new(p.x, p.y)
    }
}

/// Ordered, possibly repeating list of pixels touched by one interaction tick.
pub type PointSet = Vec<PixelPoint>;
