//! Live preview of brush points.

use crate::core::{Error, Result, Vec2};
use crate::mask::PixelPoint;
use super::{BatchGuard, BrushSurface, DeviceRect, PixelToDevice};

/// Draws one device-space box per brush pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrushRenderer;

impl BrushRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Device size of one image pixel: `map(1,1) - map(0,0)`.
    ///
    /// Assumes the transform scales uniformly across the viewport (pan/zoom).
    pub fn pixel_box_size<T: PixelToDevice + ?Sized>(transform: &T) -> Result<Vec2> {
        let top_left = transform.pixel_to_device(Vec2::ZERO)?;
        let bottom_right = transform.pixel_to_device(Vec2::ONE)?;
        let size = bottom_right - top_left;
        if !size.is_finite() {
            return Err(Error::RenderUnavailable(format!("degenerate pixel size {size}")));
        }
        Ok(size)
    }

    /// Fill one box per point on `surface`, all within a single batch.
    ///
    /// The batch is ended on every path out of this call, including a failed
    /// transform or fill midway through the points. Mask data is never touched.
    pub fn render_preview<T, S>(
        &self,
        points: &[PixelPoint],
        transform: &T,
        surface: &mut S,
        color: &S::Color,
    ) -> Result<()>
    where
        T: PixelToDevice + ?Sized,
        S: BrushSurface + ?Sized,
    {
        if points.is_empty() {
            return Ok(());
        }

        let result = Self::draw_boxes(points, transform, surface, color);
        if let Err(e) = &result {
            log::warn!("brush preview of {} points failed: {e}", points.len());
        }
        result
    }

    fn draw_boxes<T, S>(
        points: &[PixelPoint],
        transform: &T,
        surface: &mut S,
        color: &S::Color,
    ) -> Result<()>
    where
        T: PixelToDevice + ?Sized,
        S: BrushSurface + ?Sized,
    {
        let size = Self::pixel_box_size(transform)?;

        let mut batch = BatchGuard::begin(surface)?;
        for point in points {
            let origin = transform.pixel_to_device(Vec2::new(point.x as f32, point.y as f32))?;
            batch.fill_rect(DeviceRect::new(origin, size), color)?;
        }
        log::trace!("previewed {} brush pixels at box size {size}", points.len());
        Ok(())
    }
}
