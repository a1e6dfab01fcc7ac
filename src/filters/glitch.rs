//! Row-banding glitch.
//!
//! Every tenth row is rotated right by a random shift in [0, 20] and gets a
//! channel boost: +50 red on rows divisible by 20, else +50 green on rows
//! divisible by 15. Because the shift is constant across the row and `x`
//! covers every column, the write targets `(x + shift) mod width` form an
//! exact permutation of the row — every column is written once, none twice.
//! Reads come from a copy of the row taken before any write, so pixels that
//! have already been moved are never re-read.

use crate::image::{ImageView, PixelBuffer, Rgba};
use rand::Rng;

pub fn glitch<R: Rng>(img: &mut PixelBuffer, rng: &mut R) {
    let width = img.width();
    let height = img.height();
    if width == 0 {
        return;
    }

    for y in (0..height).step_by(10) {
        let shift = rng.gen_range(0..=20usize);
        let row: Vec<Rgba> = img.row(y).to_vec();
        for (x, mut px) in row.into_iter().enumerate() {
            let new_x = (x + shift) % width;
            if y % 20 == 0 {
                px[0] = px[0].saturating_add(50);
            } else if y % 15 == 0 {
                px[1] = px[1].saturating_add(50);
            }
            img.set_pixel(new_x as i32, y as i32, px);
        }
    }
}
