//! I/O helpers for RGBA images.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `save_rgba_image`: write a `PixelBuffer` to disk (format by extension).
//!
//! Every source format is normalized to 4×8-bit RGBA on decode — palette,
//! grayscale, 16-bit, and transparency-chunk variants included — so the
//! filters only ever see the canonical layout.

use super::{ImageView, PixelBuffer, Rgba};
use image::RgbaImage;
use log::debug;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<Rgba> = img
        .into_raw()
        .chunks_exact(4)
        .map(|px| [px[0], px[1], px[2], px[3]])
        .collect();
    debug!("loaded {} ({width}x{height})", path.display());
    PixelBuffer::from_raw(width, height, data)
        .ok_or_else(|| format!("Decoded size mismatch for {}", path.display()))
}

/// Save an RGBA8 buffer to disk, creating parent directories.
pub fn save_rgba_image(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut bytes = Vec::with_capacity(buffer.width() * buffer.height() * 4);
    for row in buffer.rows() {
        for px in row {
            bytes.extend_from_slice(px);
        }
    }
    let image: RgbaImage =
        RgbaImage::from_raw(buffer.width() as u32, buffer.height() as u32, bytes)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
    debug!(
        "saved {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
