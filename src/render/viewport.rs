//! Pan/zoom viewport transform.

use crate::core::{Affine2, Error, Result, Vec2};
use super::PixelToDevice;

/// Affine pixel-to-device mapping of a 2D viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pixel_to_device: Affine2,
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self { pixel_to_device: Affine2::IDENTITY };

    pub fn new(pixel_to_device: Affine2) -> Self {
        Self { pixel_to_device }
    }

    /// Uniform `zoom` about the image origin, then translate by `pan` device units.
    pub fn pan_zoom(pan: Vec2, zoom: f32) -> Self {
        Self::new(Affine2::from_scale_angle_translation(Vec2::splat(zoom), 0.0, pan))
    }

    /// Fit a `columns x rows` image centered into a `width x height` device area.
    pub fn fit(columns: u32, rows: u32, width: f32, height: f32) -> Self {
        let image = Vec2::new(columns as f32, rows as f32);
        let device = Vec2::new(width, height);
        let zoom = (device / image).min_element();
        Self::pan_zoom((device - image * zoom) * 0.5, zoom)
    }

    pub fn affine(&self) -> Affine2 {
        self.pixel_to_device
    }

    /// Inverse mapping, for turning pointer positions back into pixels.
    pub fn device_to_pixel(&self, device: Vec2) -> Result<Vec2> {
        self.check()?;
        Ok(self.pixel_to_device.inverse().transform_point2(device))
    }

    fn check(&self) -> Result<()> {
        let det = self.pixel_to_device.matrix2.determinant();
        if !self.pixel_to_device.is_finite() || det == 0.0 {
            return Err(Error::RenderUnavailable("viewport transform is singular".into()));
        }
        Ok(())
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PixelToDevice for ViewportTransform {
    fn pixel_to_device(&self, pixel: Vec2) -> Result<Vec2> {
        self.check()?;
        Ok(self.pixel_to_device.transform_point2(pixel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BrushRenderer;

    #[test]
    fn test_identity() {
        let t = ViewportTransform::default();
        assert_eq!(t.pixel_to_device(Vec2::new(3.0, 4.0)).unwrap(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_pan_zoom() {
        let t = ViewportTransform::pan_zoom(Vec2::new(4.0, 12.0), 2.0);
        assert_eq!(t.pixel_to_device(Vec2::new(3.0, 4.0)).unwrap(), Vec2::new(10.0, 20.0));
        assert_eq!(BrushRenderer::pixel_box_size(&t).unwrap(), Vec2::splat(2.0));
    }

    #[test]
    fn test_device_to_pixel_inverts() {
        let t = ViewportTransform::pan_zoom(Vec2::new(-5.0, 7.0), 0.5);
        let pixel = Vec2::new(40.0, 12.0);
        let device = t.pixel_to_device(pixel).unwrap();
        let back = t.device_to_pixel(device).unwrap();
        assert!((back - pixel).length() < 1e-4);
    }

    #[test]
    fn test_fit_centers_image() {
        // 100x50 image in a 400x400 area: zoom 4, letterboxed vertically
        let t = ViewportTransform::fit(100, 50, 400.0, 400.0);
        assert_eq!(t.pixel_to_device(Vec2::ZERO).unwrap(), Vec2::new(0.0, 100.0));
        assert_eq!(t.pixel_to_device(Vec2::new(100.0, 50.0)).unwrap(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_zero_zoom_unavailable() {
        let t = ViewportTransform::pan_zoom(Vec2::ZERO, 0.0);
        assert!(matches!(t.pixel_to_device(Vec2::ONE), Err(Error::RenderUnavailable(_))));
        assert!(t.device_to_pixel(Vec2::ONE).is_err());
    }
}
