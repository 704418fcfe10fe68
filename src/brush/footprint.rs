//! Brush footprints: pixel stamps laid around a pointer sample.

use crate::mask::PixelPoint;
use super::config::{BrushConfig, FootprintShape};

/// Stamp shape with its radius in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushFootprint {
    /// Pixels with `dx² + dy² <= r²`
    Circle { radius: u32 },
    /// Pixels with `max(|dx|, |dy|) <= r`
    Square { radius: u32 },
}

impl BrushFootprint {
    pub fn circle(radius: u32) -> Self {
        BrushFootprint::Circle { radius }
    }

    pub fn square(radius: u32) -> Self {
        BrushFootprint::Square { radius }
    }

    pub fn from_config(config: &BrushConfig) -> Self {
        match config.footprint_shape {
            FootprintShape::Circle => Self::circle(config.footprint_radius),
            FootprintShape::Square => Self::square(config.footprint_radius),
        }
    }

    pub fn radius(&self) -> u32 {
        match *self {
            BrushFootprint::Circle { radius } | BrushFootprint::Square { radius } => radius,
        }
    }

    /// Check if an offset from the stamp center is covered
    pub fn contains_offset(&self, dx: i64, dy: i64) -> bool {
        match *self {
            BrushFootprint::Circle { radius } => {
                let r = radius as i64;
                dx * dx + dy * dy <= r * r
            }
            BrushFootprint::Square { radius } => {
                dx.abs().max(dy.abs()) <= radius as i64
            }
        }
    }

    /// Pixels covered by a stamp at `center`, clipped to a `columns x rows` image.
    ///
    /// Row-major order, no duplicates. A center outside the image still
    /// contributes whatever part of the stamp overlaps it.
    pub fn stamp(&self, center: PixelPoint, columns: u32, rows: u32) -> Vec<PixelPoint> {
        if columns == 0 || rows == 0 {
            return Vec::new();
        }

        let r = self.radius() as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        let min_x = (cx - r).max(0);
        let min_y = (cy - r).max(0);
        let max_x = (cx + r).min(columns as i64 - 1);
        let max_y = (cy + r).min(rows as i64 - 1);

        let mut points = Vec::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if self.contains_offset(x - cx, y - cy) {
                    points.push(PixelPoint::new(x as u32, y as u32));
                }
            }
        }
        points
    }
}

impl Default for BrushFootprint {
    fn default() -> Self {
        Self::from_config(&BrushConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_zero_is_single_pixel() {
        for fp in [BrushFootprint::circle(0), BrushFootprint::square(0)] {
            assert_eq!(fp.stamp(PixelPoint::new(2, 3), 8, 8), vec![PixelPoint::new(2, 3)]);
        }
    }

    #[test]
    fn test_circle_radius_one_is_plus() {
        let points = BrushFootprint::circle(1).stamp(PixelPoint::new(2, 2), 8, 8);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&PixelPoint::new(2, 1)));
        assert!(points.contains(&PixelPoint::new(1, 2)));
        assert!(!points.contains(&PixelPoint::new(1, 1)));
    }

    #[test]
    fn test_square_radius_one() {
        let points = BrushFootprint::square(1).stamp(PixelPoint::new(2, 2), 8, 8);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&PixelPoint::new(1, 1)));
    }

    #[test]
    fn test_stamp_clipped_at_corner() {
        let points = BrushFootprint::square(2).stamp(PixelPoint::new(0, 0), 4, 4);
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.x < 4 && p.y < 4));
    }

    #[test]
    fn test_stamp_never_out_of_bounds() {
        let fp = BrushFootprint::circle(5);
        for &(cx, cy) in &[(0, 0), (9, 0), (0, 6), (9, 6), (4, 3), (30, 30)] {
            for p in fp.stamp(PixelPoint::new(cx, cy), 10, 7) {
                assert!(p.x < 10 && p.y < 7, "({}, {}) escaped", p.x, p.y);
            }
        }
    }

    #[test]
    fn test_stamp_center_far_outside_is_empty() {
        assert!(BrushFootprint::circle(2).stamp(PixelPoint::new(50, 50), 4, 4).is_empty());
        assert!(BrushFootprint::circle(2).stamp(PixelPoint::new(0, 0), 0, 4).is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = BrushConfig {
            footprint_radius: 4,
            footprint_shape: FootprintShape::Square,
            ..Default::default()
        };
        assert_eq!(BrushFootprint::from_config(&config), BrushFootprint::square(4));
        assert_eq!(BrushFootprint::default(), BrushFootprint::circle(3));
    }
}
