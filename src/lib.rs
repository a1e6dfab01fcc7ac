#![doc = include_str!("../README.md")]

pub mod filters;
pub mod image;

// Main entry points: the buffer + the filter engine.
pub use crate::filters::{
    color_noise, glitch, grayscale, solar_rays, wave_distortion, Filter, FilterParams,
};
pub use crate::image::{PixelBuffer, Rgba, SENTINEL};

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_distort::prelude::*;
///
/// let mut img = PixelBuffer::new(16, 16);
/// solar_rays(&mut img);
/// assert_eq!(img.width(), 16);
/// ```
pub mod prelude {
    pub use crate::filters::{
        color_noise, glitch, grayscale, solar_rays, wave_distortion, Filter, FilterParams,
    };
    pub use crate::image::{PixelBuffer, Rgba};
}
