//! Reduction of decoded images to a single intensity per pixel.
//!
//! Grayscale pixels keep their 8-bit value. Color pixels keep the top five
//! bits of red, green and blue, packed as a 15-bit code `(R<<10)|(G<<5)|B`.
//! Alpha is ignored.

use crate::error::{MapError, Result};
use crate::field::IntensityField;
use image::GenericImageView;
use std::path::Path;
use tracing::{debug, warn};

/// Number of distinct grayscale intensities.
pub const GRAY_LEVELS: u32 = 1 << 8;

/// Number of distinct packed RGB intensities.
pub const RGB15_LEVELS: u32 = 1 << 15;

/// Packs the five most significant bits of each channel into a 15-bit code.
#[inline]
pub fn pack_rgb15(r: u8, g: u8, b: u8) -> u32 {
    let (r, g, b) = (u32::from(r >> 3), u32::from(g >> 3), u32::from(b >> 3));
    (r << 10) | (g << 5) | b
}

/// Reduces an interleaved 8-bit pixel buffer with `channels` samples per
/// pixel (1..=4) to an intensity field.
///
/// Two-channel (gray + alpha) input is not mapped and yields intensity 0 for
/// every pixel.
pub fn reduce(pixels: &[u8], width: usize, height: usize, channels: usize) -> Result<IntensityField> {
    if !(1..=4).contains(&channels) {
        return Err(MapError::InvalidInput(format!(
            "unsupported channel count {channels}"
        )));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| MapError::InvalidInput(format!("{width}x{height} image overflows")))?;
    if pixels.len() != expected {
        return Err(MapError::InvalidInput(format!(
            "pixel buffer holds {} bytes, expected {expected}",
            pixels.len()
        )));
    }

    let data = match channels {
        1 => pixels.iter().map(|&v| u32::from(v)).collect(),
        2 => {
            warn!(width, height, "gray+alpha image has no intensity mapping; using 0");
            vec![0; width * height]
        }
        _ => pixels
            .chunks_exact(channels)
            .map(|px| pack_rgb15(px[0], px[1], px[2]))
            .collect(),
    };

    IntensityField::new(width, height, data)
}

/// Decodes an image file and reduces it to an intensity field.
///
/// Samples are converted to 8 bits while the native channel layout is kept,
/// so 16-bit and float images are quantized the same way as 8-bit ones.
pub fn load_intensity(path: &Path) -> Result<IntensityField> {
    let img = image::open(path).map_err(|source| MapError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    let color = img.color();
    let (channels, pixels) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, img.into_luma8().into_raw()),
        (false, true) => (2, img.into_luma_alpha8().into_raw()),
        (true, false) => (3, img.into_rgb8().into_raw()),
        (true, true) => (4, img.into_rgba8().into_raw()),
    };
    debug!(
        path = %path.display(),
        width,
        height,
        channels,
        "Decoded image"
    );

    reduce(&pixels, width as usize, height as usize, channels)
}
