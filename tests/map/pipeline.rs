//! End-to-end pipeline runs on generated image files.

use crate::common::{noisy_rgb_png, read_map, solid_gray_png};
use shannon_map::{load_intensity, process_file, run_batch, ErrorPolicy, MapConfig, MapError};
use std::fs;

#[test]
fn test_uniform_2x2_output_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = solid_gray_png(dir.path(), "flat.png", 2, 2, 0);
    let config = MapConfig {
        padding: 1,
        ..MapConfig::default()
    };

    let report = process_file(&input, &config).unwrap();
    let text = fs::read_to_string(&report.output).unwrap();
    assert_eq!(text.lines().count(), 2);
    for line in text.lines() {
        let values: Vec<f64> = line.split(' ').map(|v| v.parse().unwrap()).collect();
        assert_eq!(values, vec![0.0, 0.0]);
    }
}

#[test]
fn test_rgb_map_shape_and_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = noisy_rgb_png(dir.path(), "noise.png", 17, 11, 3);
    let out_dir = dir.path().join("maps");
    fs::create_dir(&out_dir).unwrap();
    let config = MapConfig {
        padding: 2,
        output_dir: Some(out_dir.clone()),
        ..MapConfig::default()
    };

    let report = process_file(&input, &config).unwrap();
    assert_eq!(report.output, out_dir.join("noise_entropy_5x5.txt"));

    let rows = read_map(&report.output);
    assert_eq!(rows.len(), 11);
    for row in &rows {
        assert_eq!(row.len(), 17);
        assert!(row.iter().all(|&v| (-1e-6..=1.0 + 1e-6).contains(&v)));
    }

    // Random 15-bit colours are almost surely distinct inside an interior window
    let summary = report.summary.unwrap();
    assert!(summary.max > 0.99);
    assert!(summary.min >= 0.0 && summary.mean <= f64::from(summary.max));
}

#[test]
fn test_rgb_intensity_reduction_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.png");
    let img = image::RgbImage::from_fn(2, 1, |x, _| {
        if x == 0 {
            image::Rgb([248, 248, 248])
        } else {
            image::Rgb([0, 0, 0])
        }
    });
    img.save(&path).unwrap();

    let field = load_intensity(&path).unwrap();
    assert_eq!(field.as_slice(), &[32767, 0]);
}

#[test]
fn test_batch_skips_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.png");
    fs::write(&bogus, b"not an image").unwrap();
    let good = solid_gray_png(dir.path(), "good.png", 4, 4, 0);

    let report = run_batch(&[bogus.clone(), good], &MapConfig::default()).unwrap();
    assert_eq!(report.processed.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].input, bogus);
    assert!(dir.path().join("good_entropy_9x9.txt").exists());
}

#[test]
fn test_batch_abort_on_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.png");
    fs::write(&bogus, b"not an image").unwrap();
    let good = solid_gray_png(dir.path(), "good.png", 4, 4, 0);
    let config = MapConfig {
        on_error: ErrorPolicy::Abort,
        ..MapConfig::default()
    };

    let err = run_batch(&[bogus, good], &config).unwrap_err();
    assert!(matches!(err, MapError::Batch { failed: 1, total: 2, .. }));
    if let MapError::Batch { report, .. } = err {
        assert_eq!(report.total(), 1);
    }
}

#[test]
fn test_report_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let good = solid_gray_png(dir.path(), "good.png", 3, 3, 0);
    let report = run_batch(&[good], &MapConfig::default()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["processed"][0]["window"], 9);
    assert_eq!(json["processed"][0]["summary"]["max"], 0.0);
    assert!(json["failed"].as_array().unwrap().is_empty());
}

#[test]
fn test_huge_padding_in_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let good = solid_gray_png(dir.path(), "good.png", 3, 3, 0);
    let config = MapConfig::from_json_str(r#"{"padding": 1000000}"#).unwrap();

    let err = run_batch(&[good], &config).unwrap_err();
    assert!(matches!(err, MapError::InvalidInput(_)));
    assert!(!dir.path().join("good_entropy_2000001x2000001.txt").exists());
}
