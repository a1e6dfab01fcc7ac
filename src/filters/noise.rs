//! Additive per-channel color noise.
//!
//! Each of R, G, B gets an independent uniform draw from [-250, 250] scaled
//! by `intensity * 3.5`. The scaling means most non-zero intensities
//! saturate channels to 0 or 255 rather than producing graded noise; that
//! matches the original formula and is kept as-is. At intensity 0 every
//! contribution is 0, so the image is unchanged even though the generator
//! is still driven.

use crate::image::{ImageViewMut, PixelBuffer};
use rand::Rng;

/// Default noise intensity.
pub const DEFAULT_NOISE_INTENSITY: f32 = 0.5;

pub fn color_noise<R: Rng>(img: &mut PixelBuffer, intensity: f32, rng: &mut R) {
    let noise_factor = intensity * 3.5;

    for row in img.rows_mut() {
        for px in row {
            for c in &mut px[..3] {
                let noise = (rng.gen_range(-250..=250) as f32 * noise_factor) as i32;
                *c = (i32::from(*c) + noise).clamp(0, 255) as u8;
            }
        }
    }
}
