//! Tests for weighted mixing.

use super::*;

#[test]
fn test_mixer_new_is_silent() {
    let mixer = Mixer::new(100);
    assert_eq!(mixer.num_samples(), 100);
    assert_eq!(mixer.num_components(), 0);
    assert!(mixer.into_samples().iter().all(|&s| s == 0.0));
}

#[test]
fn test_weighted_sum() {
    let mut mixer = Mixer::new(3);
    mixer.add(0.5, &[1.0, 2.0, 3.0]).add(2.0, &[1.0, 0.0, -1.0]);
    assert_eq!(mixer.num_components(), 2);
    assert_eq!(mixer.into_samples(), vec![2.5, 1.0, -0.5]);
}

#[test]
fn test_short_component_only_fills_head() {
    let mut mixer = Mixer::new(4);
    mixer.add(1.0, &[1.0, 1.0]);
    assert_eq!(mixer.into_samples(), vec![1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_long_component_is_truncated() {
    let mut mixer = Mixer::new(2);
    mixer.add(1.0, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(mixer.into_samples(), vec![1.0, 2.0]);
}

#[test]
fn test_gain_and_map() {
    let mut mixer = Mixer::new(2);
    mixer.add(1.0, &[0.5, -1.0]).gain(0.5).map(|x| x * 4.0);
    assert_eq!(mixer.into_samples(), vec![1.0, -2.0]);
}
