//! Sliding engine against the brute-force reference and field invariants.

use crate::common::random_field;
use shannon_map::entropy::{
    brute_force_map, entropy_map, raw_entropy, window_entropy, Boustrophedon, LogWeightedTable,
};
use shannon_map::{pad, unpad, IntensityField, MapError};

const TOLERANCE: f32 = 1e-4;

#[test]
fn test_matches_brute_force_16x16() {
    let field = random_field(7, 16, 16, 256);
    let fast = entropy_map(&field, 2).unwrap();
    let slow = brute_force_map(&field, 2);

    for y in 0..16 {
        for x in 0..16 {
            let (a, b) = (fast.get(x, y), slow.get(x, y));
            assert!((a - b).abs() < TOLERANCE, "({x},{y}): {a} vs {b}");
        }
    }
}

#[test]
fn test_matches_brute_force_rgb_levels() {
    // Sparse 15-bit intensities exercise a large histogram
    let field = random_field(11, 13, 9, 1 << 15);
    for p in [1, 3] {
        let fast = entropy_map(&field, p).unwrap();
        let slow = brute_force_map(&field, p);
        for (a, b) in fast.as_slice().iter().zip(slow.as_slice()) {
            assert!((a - b).abs() < TOLERANCE, "p={p}: {a} vs {b}");
        }
    }
}

#[test]
fn test_window_sized_image() {
    // width = height = window edge
    let field = random_field(3, 5, 5, 4);
    let map = entropy_map(&field, 2).unwrap();
    let padded = pad(&field, 2);
    let cells = padded.as_field();

    for y in 0..5 {
        for x in 0..5 {
            let window: Vec<u32> = (y..y + 5)
                .flat_map(|r| cells.row(r)[x..x + 5].to_vec())
                .collect();
            let expected = window_entropy(&window) as f32;
            assert!((map.get(x, y) - expected).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_dimensions_preserved() {
    for (w, h) in [(1, 1), (1, 9), (9, 1), (4, 7), (20, 3)] {
        let field = random_field(w as u64, w, h, 16);
        for p in 0..3 {
            let map = entropy_map(&field, p).unwrap();
            assert_eq!((map.width(), map.height()), (w, h));
        }
    }
}

#[test]
fn test_values_in_unit_interval() {
    let field = random_field(42, 24, 18, 6);
    for p in 1..5 {
        let map = entropy_map(&field, p).unwrap();
        for &v in map.as_slice() {
            assert!((-1e-6..=1.0 + 1e-6).contains(&v), "p={p}: {v}");
        }
    }
}

#[test]
fn test_all_distinct_window_is_one() {
    // 3x3 distinct nonzero values: centre window with p=1 is all distinct
    let field = IntensityField::new(3, 3, (1..=9).collect()).unwrap();
    let map = entropy_map(&field, 1).unwrap();
    assert_eq!(map.get(1, 1), 1.0);
}

#[test]
fn test_uniform_black_image_is_zero() {
    let field = IntensityField::filled(11, 6, 0);
    for p in 0..5 {
        let map = entropy_map(&field, p).unwrap();
        assert!(map.as_slice().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn test_uniform_gray_interior_is_zero() {
    let field = IntensityField::filled(12, 12, 200);
    let p = 2;
    let map = entropy_map(&field, p).unwrap();
    for y in p..12 - p {
        for x in p..12 - p {
            assert!(map.get(x, y).abs() < 1e-6, "({x},{y}) = {}", map.get(x, y));
        }
    }
    // Border windows include the zero padding
    assert!(map.get(0, 0) > 0.0);
}

#[test]
fn test_scan_visits_each_pixel_once() {
    let mut visits = vec![0u32; 25];
    for step in Boustrophedon::new(5, 5) {
        visits[step.y * 5 + step.x] += 1;
    }
    assert!(visits.iter().all(|&n| n == 1));
    assert_eq!(Boustrophedon::new(5, 5).count(), 25);
}

#[test]
fn test_raw_entropy_single_precision_table() {
    let field = random_field(5, 6, 6, 3);
    let table = LogWeightedTable::for_padding(1).unwrap();
    let raw = raw_entropy(&pad(&field, 1), &table);
    let floor = -table.uniform_weight();
    for &v in raw.as_slice() {
        assert!(v >= floor - 1e-3 && v <= 1e-6);
    }
}

#[test]
fn test_pad_unpad_roundtrip() {
    let field = random_field(9, 10, 7, 1 << 15);
    for p in [0, 1, 4] {
        assert_eq!(unpad(&pad(&field, p)), field);
    }
}

#[test]
fn test_oversized_padding_is_rejected() {
    let field = random_field(1, 4, 4, 16);
    for padding in [40_000, usize::MAX / 2] {
        let err = entropy_map(&field, padding).unwrap_err();
        assert!(matches!(err, MapError::InvalidInput(_)), "padding {padding}");
    }
}
