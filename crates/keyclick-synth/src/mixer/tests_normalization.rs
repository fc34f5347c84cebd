//! Tests for peak normalization.

use super::*;

#[test]
fn test_normalize_to_target_peak() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    normalize_peak(&mut samples, TARGET_PEAK);
    assert!((peak(&samples) - 0.7).abs() < 1e-12);
    // Ratios preserved
    assert!((samples[0] / samples[2] - 0.5 / 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.1, -4.0, 2.0];
    normalize_peak(&mut samples, TARGET_PEAK);
    assert!((samples[1] + 0.7).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0, 0.0, 0.0, 0.0];
    normalize_peak(&mut samples, TARGET_PEAK);

    // Silent audio should remain silent (no division by zero)
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_quiet_audio_is_boosted() {
    let mut samples = vec![0.01, -0.005, 0.008, -0.003];
    normalize_peak(&mut samples, 1.0);
    assert!((peak(&samples) - 1.0).abs() < 1e-12);
}

#[test]
fn test_peak_of_empty_buffer() {
    assert_eq!(peak(&[]), 0.0);
}
