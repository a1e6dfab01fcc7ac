//! Radial light-ray brightening.
//!
//! An interference pattern that is sinusoidal in the angle around the image
//! center and fades linearly with distance, simulating rays of light. The
//! boost is purely additive and depends only on the pixel's own position,
//! so there is no read dependency on neighbors and no snapshot is needed.

use crate::image::PixelBuffer;

pub fn solar_rays(img: &mut PixelBuffer) {
    let width = img.width() as i32;
    let height = img.height() as i32;
    let center_x = width / 2;
    let center_y = height / 2;
    let max_dist = ((center_x * center_x + center_y * center_y) as f32).sqrt();

    for y in 0..height {
        for x in 0..width {
            let dx = (x - center_x) as f32;
            let dy = (y - center_y) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            let angle = dy.atan2(dx);
            // On a 1x1 image max_dist is 0 and the ratio is NaN; f32::max
            // maps that to 0, so the single pixel is left untouched.
            let intensity = ((angle * 10.0).sin() * (1.0 - dist / max_dist)).max(0.0) * 100.0;
            let boost = intensity as i32;

            let mut px = img.get_pixel(x, y);
            for c in &mut px[..3] {
                *c = (i32::from(*c) + boost).min(255) as u8;
            }
            img.set_pixel(x, y, px);
        }
    }
}
