//! Common test utilities and helpers.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shannon_map::IntensityField;
use std::path::{Path, PathBuf};

/// Deterministic random field with intensities in `0..levels`.
pub fn random_field(seed: u64, width: usize, height: usize, levels: u32) -> IntensityField {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen_range(0..levels)).collect();
    IntensityField::new(width, height, data).expect("random field dimensions")
}

/// Saves a grayscale PNG filled with `value`.
pub fn solid_gray_png(dir: &Path, name: &str, width: u32, height: u32, value: u8) -> PathBuf {
    let path = dir.join(name);
    image::GrayImage::from_pixel(width, height, image::Luma([value]))
        .save(&path)
        .expect("write gray png");
    path
}

/// Saves an RGB PNG of deterministic noise.
pub fn noisy_rgb_png(dir: &Path, name: &str, width: u32, height: u32, seed: u64) -> PathBuf {
    let path = dir.join(name);
    let mut rng = StdRng::seed_from_u64(seed);
    let img = image::RgbImage::from_fn(width, height, |_, _| image::Rgb(rng.gen()));
    img.save(&path).expect("write rgb png");
    path
}

/// Parses a written entropy map back into rows of values.
pub fn read_map(path: &Path) -> Vec<Vec<f64>> {
    std::fs::read_to_string(path)
        .expect("read entropy map")
        .lines()
        .map(|line| {
            line.split(' ')
                .map(|v| v.parse().expect("numeric entropy value"))
                .collect()
        })
        .collect()
}
