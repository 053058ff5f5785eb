#![no_main]
use libfuzzer_sys::fuzz_target;
use shannon_map::entropy::entropy_map;
use shannon_map::IntensityField;

// First byte: width, second: padding; the rest are gray intensities.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let width = usize::from(data[0] % 32) + 1;
    let padding = usize::from(data[1] % 6);
    let pixels = &data[2..];
    let height = pixels.len() / width;
    let cells = pixels[..width * height].iter().map(|&v| u32::from(v)).collect();
    let Ok(field) = IntensityField::new(width, height, cells) else {
        return;
    };

    let map = entropy_map(&field, padding).unwrap();
    assert_eq!((map.width(), map.height()), (width, height));
    assert!(map
        .as_slice()
        .iter()
        .all(|&v| (-1e-4..=1.0 + 1e-4).contains(&v)));
});
