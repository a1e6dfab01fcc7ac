//! Luminance grayscale with Rec. 601 weights.

use crate::image::{ImageViewMut, PixelBuffer};

pub fn grayscale(img: &mut PixelBuffer) {
    for row in img.rows_mut() {
        for px in row {
            // Weights sum to 1, so equal channels are a fixed point and a
            // second pass changes nothing.
            let gray = (0.299 * f32::from(px[0])
                + 0.587 * f32::from(px[1])
                + 0.114 * f32::from(px[2]))
            .round() as u8;
            px[0] = gray;
            px[1] = gray;
            px[2] = gray;
        }
    }
}
