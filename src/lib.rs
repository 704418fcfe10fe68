//! Labelbrush - brush painting engine for segmentation labelmaps

pub mod core;
pub mod mask;
pub mod brush;
pub mod render;

pub use crate::core::{Error, Result};
pub use mask::{LabelmapVolume, PixelPoint, PointSet, SegmentIndex, SliceId, SliceLabelmap};
pub use brush::{BrushConfig, BrushMode, MaskPainter, PaintOutcome};
pub use render::{BrushRenderer, BrushSurface, DeviceRect, PixelToDevice};
