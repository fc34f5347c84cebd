//! Tests for the saturation stage and the full pipeline.

use super::*;

#[test]
fn test_saturate_sample_known_values() {
    assert_eq!(saturate_sample(0.0), 0.0);
    let expected = (0.7_f64 * 1.2).tanh() * 0.8;
    assert!((saturate_sample(0.7) - expected).abs() < 1e-15);
}

#[test]
fn test_saturate_is_odd_and_monotonic() {
    let xs: Vec<f64> = (-100..=100).map(|i| i as f64 / 20.0).collect();
    for &x in &xs {
        assert!((saturate_sample(x) + saturate_sample(-x)).abs() < 1e-15);
    }
    assert!(xs
        .windows(2)
        .all(|w| saturate_sample(w[1]) >= saturate_sample(w[0])));
}

#[test]
fn test_saturate_is_bounded() {
    let mut samples = vec![1e6, -1e6, 50.0, -3.0, f64::MAX];
    saturate(&mut samples);
    assert!(samples.iter().all(|s| s.abs() <= SATURATION_OUTPUT));
}

#[test]
fn test_finalize_peak() {
    let mut samples = vec![3.0, -1.0, 0.5, -6.0];
    finalize(&mut samples);

    let expected_peak = (TARGET_PEAK * SATURATION_DRIVE).tanh() * SATURATION_OUTPUT;
    assert!((peak(&samples) - expected_peak).abs() < 1e-12);
    assert!(peak(&samples) <= SATURATION_OUTPUT);
    // The loudest input sample maps to the loudest output sample
    assert!(samples[3] < 0.0 && samples[3].abs() == peak(&samples));
}

#[test]
fn test_finalize_is_independent_of_input_scale() {
    let mut quiet = vec![0.01, -0.02, 0.005];
    let mut loud = vec![10.0, -20.0, 5.0];
    finalize(&mut quiet);
    finalize(&mut loud);
    for (a, b) in quiet.iter().zip(loud.iter()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_finalize_silence_stays_silent() {
    let mut samples = vec![0.0; 16];
    finalize(&mut samples);
    assert!(samples.iter().all(|&s| s == 0.0));
}
