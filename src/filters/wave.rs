//! Sinusoidal coordinate-remap distortion.
//!
//! Every destination pixel samples the pre-filter image at a displaced
//! source coordinate. The snapshot is taken before any write: sampling the
//! live buffer would let already-distorted pixels contaminate later reads.
//! Out-of-bounds samples near the edges resolve to the sentinel color.

use crate::image::PixelBuffer;
use std::f32::consts::PI;

/// Default displacement amplitude, in pixels.
pub const DEFAULT_WAVE_AMPLITUDE: f32 = 10.0;

pub fn wave_distortion(img: &mut PixelBuffer, amplitude: f32) {
    let snapshot = img.clone();
    let width = img.width() as i32;
    let height = img.height() as i32;

    for y in 0..height {
        // The horizontal displacement varies only with the row.
        let offset_x = amplitude * (2.0 * PI * y as f32 / 128.0).sin();
        for x in 0..width {
            let offset_y = amplitude * (2.0 * PI * x as f32 / 128.0).cos();
            let src_x = x + offset_x as i32;
            let src_y = y + offset_y as i32;
            img.set_pixel(x, y, snapshot.get_pixel(src_x, src_y));
        }
    }
}
