//! Software brush surface backed by an RGBA image.

use image::{Rgba, RgbaImage};

use crate::core::{Error, Result};
use super::{BrushSurface, DeviceRect};

/// CPU raster target for brush previews (thumbnails, headless hosts, tests).
///
/// A device pixel is filled when its center lies inside the rectangle.
pub struct RasterSurface {
    image: RgbaImage,
    in_batch: bool,
    batches: usize,
}

impl RasterSurface {
    /// Create a transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image, in_batch: false, batches: 0 }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Completed batches so far
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    pub fn clear(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Device pixel span `[start, end)` whose centers fall in `[min, max)`.
    fn span(min: f32, max: f32, limit: u32) -> (u32, u32) {
        let start = (min - 0.5).ceil().clamp(0.0, limit as f32) as u32;
        let end = (max - 0.5).ceil().clamp(0.0, limit as f32) as u32;
        (start, end.max(start))
    }
}

impl BrushSurface for RasterSurface {
    type Color = Rgba<u8>;

    fn begin_batch(&mut self) -> Result<()> {
        if self.in_batch {
            return Err(Error::RenderUnavailable("raster surface batch already open".into()));
        }
        self.in_batch = true;
        Ok(())
    }

    fn fill_rect(&mut self, rect: DeviceRect, color: &Rgba<u8>) -> Result<()> {
        if !self.in_batch {
            return Err(Error::RenderUnavailable("fill outside of a batch".into()));
        }
        if !rect.is_finite() {
            return Err(Error::RenderUnavailable(format!("non-finite rect {rect:?}")));
        }

        let rect = rect.normalized();
        let (min, max) = (rect.min(), rect.max());
        let (x0, x1) = Self::span(min.x, max.x, self.image.width());
        let (y0, y1) = Self::span(min.y, max.y, self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, *color);
            }
        }
        Ok(())
    }

    fn end_batch(&mut self) {
        self.in_batch = false;
        self.batches += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::mask::PixelPoint;
    use crate::render::{BrushRenderer, ViewportTransform};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn filled(surface: &RasterSurface) -> Vec<(u32, u32)> {
        surface
            .image()
            .enumerate_pixels()
            .filter(|(_, _, px)| **px == RED)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_preview_scale_two() {
        let mut surface = RasterSurface::new(32, 32);
        let transform = ViewportTransform::pan_zoom(Vec2::new(4.0, 12.0), 2.0);

        BrushRenderer::new()
            .render_preview(&[PixelPoint::new(3, 4)], &transform, &mut surface, &RED)
            .unwrap();

        assert_eq!(filled(&surface), vec![(10, 20), (11, 20), (10, 21), (11, 21)]);
        assert_eq!(surface.batch_count(), 1);
    }

    #[test]
    fn test_fill_clipped_to_image() {
        let mut surface = RasterSurface::new(4, 4);
        surface.begin_batch().unwrap();
        surface
            .fill_rect(DeviceRect::new(Vec2::new(-2.0, 3.0), Vec2::new(4.0, 4.0)), &RED)
            .unwrap();
        surface.end_batch();

        assert_eq!(filled(&surface), vec![(0, 3), (1, 3)]);
    }

    #[test]
    fn test_flipped_rect_filled() {
        let mut surface = RasterSurface::new(8, 8);
        surface.begin_batch().unwrap();
        surface
            .fill_rect(DeviceRect::new(Vec2::new(3.0, 3.0), Vec2::new(-1.0, -1.0)), &RED)
            .unwrap();
        surface.end_batch();

        assert_eq!(filled(&surface), vec![(2, 2)]);
    }

    #[test]
    fn test_fill_requires_batch() {
        let mut surface = RasterSurface::new(4, 4);
        let result = surface.fill_rect(DeviceRect::new(Vec2::ZERO, Vec2::ONE), &RED);
        assert!(matches!(result, Err(Error::RenderUnavailable(_))));
    }

    #[test]
    fn test_nested_batch_rejected() {
        let mut surface = RasterSurface::new(4, 4);
        surface.begin_batch().unwrap();
        assert!(surface.begin_batch().is_err());
        surface.end_batch();
        assert!(surface.begin_batch().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut surface = RasterSurface::new(2, 2);
        surface.clear(RED);
        assert_eq!(filled(&surface).len(), 4);
        surface.clear(CLEAR);
        assert!(filled(&surface).is_empty());
    }
}
