//! Owned RGBA8 pixel buffer in row-major layout (stride == width).
//!
//! Out-of-range access is handled by policy rather than by signaling:
//! reads degrade to the opaque-black [`SENTINEL`] and writes are silently
//! dropped, so sampling near the image border is always well-defined.

/// One pixel: `[R, G, B, A]`, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Opaque black, returned for every out-of-bounds read.
pub const SENTINEL: Rgba = [0, 0, 0, 255];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
    /// Number of pixels between consecutive rows (equals `width`)
    stride: usize,
    /// Backing storage in row-major order, `len() == width * height`
    data: Vec<Rgba>,
}

impl PixelBuffer {
    /// Construct a zero-filled buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
            data: vec![[0; 4]; width * height],
        }
    }

    /// The 0×0 buffer. Every filter is a no-op on it.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Construct from raw pixels. `data.len()` must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<Rgba>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Get the pixel at (x, y), or [`SENTINEL`] when out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgba {
        if self.in_bounds(x, y) {
            self.data[self.idx(x as usize, y as usize)]
        } else {
            SENTINEL
        }
    }

    /// Set the pixel at (x, y). Out-of-bounds writes are dropped; the
    /// buffer never grows and no error is raised.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if self.in_bounds(x, y) {
            let i = self.idx(x as usize, y as usize);
            self.data[i] = color;
        }
    }
}

impl crate::image::traits::ImageView for PixelBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        (self.stride == self.width).then_some(&self.data[..self.width * self.height])
    }
}

impl crate::image::traits::ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.stride;
        let end = start + self.width;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [Rgba]> {
        if self.stride == self.width {
            Some(&mut self.data[..self.width * self.height])
        } else {
            None
        }
    }
}
