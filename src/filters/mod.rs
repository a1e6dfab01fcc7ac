//! The filter engine: five independent transforms over [`PixelBuffer`].
//!
//! Each filter is a free function that rewrites the buffer in place. All of
//! them are total over any buffer, including the empty 0×0 one (zero
//! iterations, buffer unchanged). Filters never call each other, and the two
//! randomized filters take their generator explicitly so callers control
//! seeding and reproducibility.

mod glitch;
mod grayscale;
mod noise;
mod solar_rays;
mod wave;

pub use self::glitch::glitch;
pub use self::grayscale::grayscale;
pub use self::noise::{color_noise, DEFAULT_NOISE_INTENSITY};
pub use self::solar_rays::solar_rays;
pub use self::wave::{wave_distortion, DEFAULT_WAVE_AMPLITUDE};

use crate::image::PixelBuffer;
use log::debug;
use rand::Rng;
use serde::Deserialize;

/// Numeric parameters for the filters that take one.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Displacement amplitude for [`wave_distortion`], in pixels.
    pub wave_amplitude: f32,
    /// Intensity for [`color_noise`]; 0 leaves the image unchanged.
    pub noise_intensity: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            wave_amplitude: DEFAULT_WAVE_AMPLITUDE,
            noise_intensity: DEFAULT_NOISE_INTENSITY,
        }
    }
}

/// Filter selector, one variant per transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    SolarRays,
    WaveDistortion,
    ColorNoise,
    Glitch,
    Grayscale,
}

impl Filter {
    /// Map the console menu identifiers 1–5; anything else is a caller
    /// input error.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::SolarRays),
            2 => Some(Self::WaveDistortion),
            3 => Some(Self::ColorNoise),
            4 => Some(Self::Glitch),
            5 => Some(Self::Grayscale),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SolarRays => "solar_rays",
            Self::WaveDistortion => "wave_distortion",
            Self::ColorNoise => "color_noise",
            Self::Glitch => "glitch",
            Self::Grayscale => "grayscale",
        }
    }

    /// Apply the selected filter in place.
    pub fn apply<R: Rng>(self, img: &mut PixelBuffer, params: &FilterParams, rng: &mut R) {
        debug!(
            "applying {} to {}x{} image",
            self.name(),
            img.width(),
            img.height()
        );
        match self {
            Self::SolarRays => solar_rays(img),
            Self::WaveDistortion => wave_distortion(img, params.wave_amplitude),
            Self::ColorNoise => color_noise(img, params.noise_intensity, rng),
            Self::Glitch => glitch(img, rng),
            Self::Grayscale => grayscale(img),
        }
    }
}

#[cfg(test)]
mod tests;
