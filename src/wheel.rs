//! Hue/saturation color wheel raster.
//!
//! Generates a square RGB8 grid where the row axis is hue (fraction of a
//! full turn) and the column axis is saturation, at fixed 50% lightness.
//! The grid is rasterized once per resolution and reused; a rendering
//! surface maps it to polar coordinates rather than regenerating it.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ChartError;
use crate::math;

/// A generated wheel raster: `resolution × resolution` cells, packed RGB8.
///
/// Cell `(i, j)` holds the HSL→RGB conversion of hue `i/N`, saturation
/// `j/N`, lightness [`constants::WHEEL_LIGHTNESS`]. Generation is a pure
/// function of `resolution`; equal resolutions yield equal rasters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorWheelImage {
    resolution: u32,
    pixels: Vec<u8>,
}

impl ColorWheelImage {
    /// Rasterize the wheel grid at `resolution` hue/saturation buckets.
    ///
    /// Fails with `InvalidParameter` when `resolution` is 0.
    pub fn generate(resolution: u32) -> Result<Self, ChartError> {
        if resolution == 0 {
            return Err(ChartError::InvalidParameter {
                what: "resolution",
                value: resolution as i64,
            });
        }

        let n = resolution as usize;
        let mut pixels = vec![0u8; n * n * 3];

        for i in 0..n {
            let hue = i as f64 / n as f64;
            let row_offset = i * n * 3;

            for j in 0..n {
                let saturation = j as f64 / n as f64;
                let (r, g, b) = math::hsl_to_rgb(hue, saturation, constants::WHEEL_LIGHTNESS);

                let offset = row_offset + j * 3;
                pixels[offset] = math::to_u8(r);
                pixels[offset + 1] = math::to_u8(g);
                pixels[offset + 2] = math::to_u8(b);
            }
        }

        Ok(ColorWheelImage { resolution, pixels })
    }

    /// Generate at the default 360-bucket resolution.
    pub fn generate_default() -> Result<Self, ChartError> {
        Self::generate(constants::WHEEL_RESOLUTION)
    }

    /// Hue/saturation bucket count per side.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The packed RGB8 buffer, hue-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB of cell `(i, j)`: hue bucket `i`, saturation bucket `j`.
    pub fn rgb_at(&self, i: u32, j: u32) -> [u8; 3] {
        let n = self.resolution as usize;
        let offset = (i as usize * n + j as usize) * 3;
        [self.pixels[offset], self.pixels[offset + 1], self.pixels[offset + 2]]
    }

    /// Sample the wheel as a polar disc.
    ///
    /// `x`/`y` are unit-disc coordinates; angle maps to hue with the
    /// [`constants::WHEEL_ANGLE_OFFSET`] rotation and radius maps to
    /// saturation. Returns `None` outside the disc.
    pub fn sample_polar(&self, x: f64, y: f64) -> Option<[u8; 3]> {
        let radius = (x * x + y * y).sqrt();
        if radius > 1.0 {
            return None;
        }

        let angle = y.atan2(x) - constants::WHEEL_ANGLE_OFFSET;
        let hue = angle.rem_euclid(TAU) / TAU;

        let n = self.resolution;
        let i = ((hue * n as f64) as u32).min(n - 1);
        let j = ((radius * n as f64) as u32).min(n - 1);
        Some(self.rgb_at(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let first = ColorWheelImage::generate(48).unwrap();
        let second = ColorWheelImage::generate(48).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = ColorWheelImage::generate(0).unwrap_err();
        assert_eq!(
            err,
            ChartError::InvalidParameter {
                what: "resolution",
                value: 0,
            }
        );
    }

    #[test]
    fn default_resolution_shape() {
        let wheel = ColorWheelImage::generate_default().unwrap();
        assert_eq!(wheel.resolution(), 360);
        assert_eq!(wheel.as_raw().len(), 360 * 360 * 3);
    }

    #[test]
    fn origin_cell_is_mid_gray() {
        // Hue 0, saturation 0 at 50% lightness: gray regardless of hue.
        let wheel = ColorWheelImage::generate(360).unwrap();
        assert_eq!(wheel.rgb_at(0, 0), [128, 128, 128]);
        // Saturation 0 stays gray for every hue row.
        assert_eq!(wheel.rgb_at(90, 0), [128, 128, 128]);
        assert_eq!(wheel.rgb_at(359, 0), [128, 128, 128]);
    }

    #[test]
    fn fully_saturated_hue_zero_is_red() {
        let wheel = ColorWheelImage::generate(4).unwrap();
        // Cell (0, 3): hue 0, saturation 3/4 at lightness 0.5.
        let [r, g, b] = wheel.rgb_at(0, 3);
        assert!(r > g && r > b);
        assert_eq!(g, b);
    }

    #[test]
    fn polar_sampling_covers_the_disc() {
        let wheel = ColorWheelImage::generate(36).unwrap();
        assert_eq!(wheel.sample_polar(0.0, 0.0), Some([128, 128, 128]));
        assert!(wheel.sample_polar(0.8, 0.8).is_none());
        // On-axis sample lands inside the disc and is fully defined.
        assert!(wheel.sample_polar(0.99, 0.0).is_some());
    }

    #[test]
    fn polar_sampling_applies_the_angle_offset() {
        let wheel = ColorWheelImage::generate(360).unwrap();
        // Sampling just past the offset direction cancels the rotation and
        // lands in the hue-0 row. Mid-bucket radius keeps the saturation
        // lookup away from bucket boundaries.
        let angle = crate::constants::WHEEL_ANGLE_OFFSET + 0.01;
        let sample = wheel.sample_polar(0.5014 * angle.cos(), 0.5014 * angle.sin());
        assert_eq!(sample, Some(wheel.rgb_at(0, 180)));
    }
}
