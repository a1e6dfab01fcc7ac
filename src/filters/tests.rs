use super::*;
use crate::image::{ImageView, PixelBuffer, Rgba, SENTINEL};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

fn solid(width: usize, height: usize, color: Rgba) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x as i32, y as i32, color);
        }
    }
    img
}

#[test]
fn every_filter_is_a_noop_on_the_empty_buffer() {
    let filters = [
        Filter::SolarRays,
        Filter::WaveDistortion,
        Filter::ColorNoise,
        Filter::Glitch,
        Filter::Grayscale,
    ];
    let params = FilterParams::default();
    for filter in filters {
        let mut img = PixelBuffer::empty();
        let mut rng = StdRng::seed_from_u64(0);
        filter.apply(&mut img, &params, &mut rng);
        assert_eq!(
            img,
            PixelBuffer::empty(),
            "{} must leave the empty buffer untouched",
            filter.name()
        );
    }
}

#[test]
fn menu_identifiers_map_one_to_five() {
    assert_eq!(Filter::from_menu_choice(1), Some(Filter::SolarRays));
    assert_eq!(Filter::from_menu_choice(2), Some(Filter::WaveDistortion));
    assert_eq!(Filter::from_menu_choice(3), Some(Filter::ColorNoise));
    assert_eq!(Filter::from_menu_choice(4), Some(Filter::Glitch));
    assert_eq!(Filter::from_menu_choice(5), Some(Filter::Grayscale));
    assert_eq!(Filter::from_menu_choice(0), None);
    assert_eq!(Filter::from_menu_choice(6), None);
}

#[test]
fn wave_with_zero_amplitude_is_the_identity() {
    let mut img = solid(6, 4, [40, 80, 120, 255]);
    img.set_pixel(3, 1, [200, 10, 10, 255]);
    let before = img.clone();
    wave_distortion(&mut img, 0.0);
    assert_eq!(img, before);
}

#[test]
fn wave_samples_the_sentinel_past_the_edges() {
    let mut img = solid(4, 4, [255, 255, 255, 255]);
    // At (0, 0) the vertical offset is amplitude * cos(0), well outside a
    // 4-pixel-tall image, so the sample degrades to opaque black.
    wave_distortion(&mut img, 50.0);
    assert_eq!(img.get_pixel(0, 0), SENTINEL);
}

#[test]
fn color_noise_at_zero_intensity_changes_nothing_but_drives_the_rng() {
    let mut img = solid(5, 5, [17, 34, 51, 68]);
    let before = img.clone();
    let mut rng = StdRng::seed_from_u64(42);
    color_noise(&mut img, 0.0, &mut rng);
    assert_eq!(img, before);

    // The generator must still have been advanced by the per-channel draws.
    let mut fresh = StdRng::seed_from_u64(42);
    assert_ne!(rng.gen::<u64>(), fresh.gen::<u64>());
}

#[test]
fn color_noise_leaves_alpha_untouched() {
    let mut img = solid(8, 8, [100, 100, 100, 200]);
    let mut rng = StdRng::seed_from_u64(7);
    color_noise(&mut img, 0.5, &mut rng);
    let mut changed = false;
    for y in 0..8 {
        for x in 0..8 {
            let px = img.get_pixel(x, y);
            assert_eq!(px[3], 200, "alpha must not be noised");
            if px != [100, 100, 100, 200] {
                changed = true;
            }
        }
    }
    assert!(changed, "intensity 0.5 should visibly alter the image");
}

#[test]
fn glitch_writes_every_column_exactly_once() {
    // Height 5 means only row 0 is processed. Column indices are encoded in
    // the green and blue channels; row 0 gets a red boost, so green/blue
    // must come out as a permutation of 0..width.
    let width = 30usize;
    let mut img = PixelBuffer::new(width, 5);
    for x in 0..width {
        img.set_pixel(x as i32, 0, [0, x as u8, x as u8, 255]);
    }
    let before = img.clone();

    let mut rng = StdRng::seed_from_u64(3);
    glitch(&mut img, &mut rng);

    let mut greens: Vec<u8> = img.row(0).iter().map(|px| px[1]).collect();
    greens.sort_unstable();
    let expected: Vec<u8> = (0..width as u8).collect();
    assert_eq!(greens, expected, "row 0 must be a permutation of its columns");
    for px in img.row(0) {
        assert_eq!(px[0], 50, "row 0 is divisible by 20 and gets a red boost");
        assert_eq!(px[3], 255);
    }
    for y in 1..5 {
        assert_eq!(img.row(y), before.row(y), "row {y} is off-stride");
    }
}

#[test]
fn glitch_preserves_pixels_of_unboosted_rows() {
    // Row 10 is processed but gets no channel boost (10 % 20 != 0 and
    // 10 % 15 != 0), so its pixel multiset must be preserved exactly.
    let width = 8usize;
    let mut img = PixelBuffer::new(width, 12);
    for y in 0..12 {
        for x in 0..width {
            img.set_pixel(x as i32, y as i32, [x as u8, y as u8, 7, 255]);
        }
    }
    let before = img.clone();

    let mut rng = StdRng::seed_from_u64(11);
    glitch(&mut img, &mut rng);

    let mut shifted: Vec<Rgba> = img.row(10).to_vec();
    let mut original: Vec<Rgba> = before.row(10).to_vec();
    shifted.sort_unstable();
    original.sort_unstable();
    assert_eq!(shifted, original, "no data loss, no double-write");
}

#[test]
fn grayscale_equalizes_channels_and_keeps_alpha() {
    let mut img = PixelBuffer::new(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            img.set_pixel(x, y, [(x * 90) as u8, (y * 70) as u8, 33, 128]);
        }
    }
    grayscale(&mut img);
    for y in 0..3 {
        for x in 0..3 {
            let px = img.get_pixel(x, y);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 128);
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let mut img = PixelBuffer::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            img.set_pixel(x, y, [(x * 60) as u8, (y * 45) as u8, (x * y * 16) as u8, 255]);
        }
    }
    grayscale(&mut img);
    let once = img.clone();
    grayscale(&mut img);
    assert_eq!(img, once);
}

#[test]
fn grayscale_fixes_already_gray_pixels() {
    let mut img = solid(4, 4, [100, 100, 100, 255]);
    grayscale(&mut img);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(img.get_pixel(x, y), [100, 100, 100, 255]);
        }
    }
}

#[test]
fn solar_rays_brightens_near_the_center_without_overflow() {
    // On a 5x3 image the center is (2, 1); its diagonal neighbor (3, 2)
    // sits where sin(10 * pi/4) peaks, for a boost of 36.
    let mut img = solid(5, 3, [100, 100, 100, 255]);
    solar_rays(&mut img);
    assert_eq!(img.get_pixel(3, 2), [136, 136, 136, 255]);
    // The exact center has zero angle and zero intensity.
    assert_eq!(img.get_pixel(2, 1), [100, 100, 100, 255]);
}

#[test]
fn solar_rays_clamps_at_channel_maximum() {
    let mut img = solid(5, 3, [240, 240, 240, 255]);
    solar_rays(&mut img);
    assert_eq!(img.get_pixel(3, 2), [255, 255, 255, 255]);
}
