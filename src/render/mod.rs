//! Brush preview rendering.
//!
//! The renderer never reaches for a viewport on its own. The host hands it a
//! [`PixelToDevice`] transform and a [`BrushSurface`] to draw on, and every
//! draw happens inside a [`BatchGuard`] so the surface is always closed again.

pub mod preview;
pub mod viewport;
pub mod raster;

pub use preview::BrushRenderer;
pub use viewport::ViewportTransform;
pub use raster::RasterSurface;

use crate::core::{Result, Vec2};

/// Maps image pixel coordinates to device (on-screen) coordinates.
pub trait PixelToDevice {
    /// Device position of the pixel-space point `pixel`.
    ///
    /// Fails with `Error::RenderUnavailable` when the viewport cannot map
    /// points right now (not laid out, degenerate, torn down).
    fn pixel_to_device(&self, pixel: Vec2) -> Result<Vec2>;
}

/// Drawing surface able to fill rectangles inside a batch.
pub trait BrushSurface {
    /// Display color, opaque to the brush engine.
    type Color;

    /// Open a batch. Every successful call is paired with one `end_batch`.
    fn begin_batch(&mut self) -> Result<()>;

    /// Fill `rect` with `color`. Only called while a batch is open.
    fn fill_rect(&mut self, rect: DeviceRect, color: &Self::Color) -> Result<()>;

    /// Close the batch and flush pending draws.
    fn end_batch(&mut self);
}

/// Rectangle in device units (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DeviceRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl DeviceRect {
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    ///
    /// Flipped viewports produce negative extents.
    pub fn normalized(self) -> Self {
        let a = self.origin;
        let b = self.origin + self.size;
        let min = a.min(b);
        Self { origin: min, size: a.max(b) - min }
    }
}

/// Open batch on a surface; ends the batch when dropped.
pub struct BatchGuard<'a, S: BrushSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: BrushSurface + ?Sized> BatchGuard<'a, S> {
    /// Begin a batch. If this fails nothing was opened and nothing is ended.
    pub fn begin(surface: &'a mut S) -> Result<Self> {
        surface.begin_batch()?;
        Ok(Self { surface })
    }

    pub fn fill_rect(&mut self, rect: DeviceRect, color: &S::Color) -> Result<()> {
        self.surface.fill_rect(rect, color)
    }
}

impl<S: BrushSurface + ?Sized> Drop for BatchGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.end_batch();
    }
}
