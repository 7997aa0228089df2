//! I/O helpers for depth frames, color frames, masks and JSON.
//!
//! - `load_depth_png`: read a 16-bit PNG (or any format) as a `DepthImage`.
//! - `load_color_image`: read an image file as an RGB `ColorImage`.
//! - `save_mask_png`: write a `StructureMask` losslessly as a 16-bit PNG,
//!   offset by 32768 so that `i16::MIN` maps to black.
//! - `save_mask_preview`: write an 8-bit PNG stretched over the mask range.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ColorImage, DepthImage, ImageView, Plane, StructureMask};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Offset applied when storing signed mask values in an unsigned PNG.
pub const MASK_PNG_OFFSET: i32 = 32768;

/// Load an image from disk as 16-bit single channel depth.
///
/// 8-bit inputs are widened by the `image` crate (`v * 257`), so real depth
/// data should always come from 16-bit PNGs.
pub fn load_depth_png(path: &Path) -> Result<DepthImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Plane::from_vec(width, height, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size for {}", path.display()))
}

/// Load an image from disk and convert to packed RGB.
pub fn load_color_image(path: &Path) -> Result<ColorImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .into_raw()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect();
    Plane::from_vec(width, height, pixels)
        .ok_or_else(|| format!("Unexpected buffer size for {}", path.display()))
}

/// Save a structure mask as a 16-bit grayscale PNG (`value + 32768`).
pub fn save_mask_png(mask: &StructureMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut data = Vec::with_capacity(mask.cell_count());
    for row in mask.rows() {
        data.extend(row.iter().map(|&v| (v as i32 + MASK_PNG_OFFSET) as u16));
    }
    let image: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(mask.w as u32, mask.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma16(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit preview of the mask, linearly stretched from its minimum
/// to its maximum value. A constant mask is written as mid-gray.
pub fn save_mask_preview(mask: &StructureMask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let lo = mask.data.iter().copied().min().unwrap_or(0) as f32;
    let hi = mask.data.iter().copied().max().unwrap_or(0) as f32;
    let span = hi - lo;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let level = if span > 0.0 {
                ((v as f32 - lo) / span * 255.0).round()
            } else {
                128.0
            };
            out.put_pixel(x as u32, y as u32, Luma([level as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
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
