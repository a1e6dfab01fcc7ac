use pixel_distort::PixelBuffer;

/// Generates a deterministic RGBA gradient with all three color channels
/// varying independently.
pub fn gradient_rgba(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let px = [
                (x * 7 % 256) as u8,
                (y * 11 % 256) as u8,
                ((x + y) * 5 % 256) as u8,
                255,
            ];
            img.set_pixel(x as i32, y as i32, px);
        }
    }
    img
}
