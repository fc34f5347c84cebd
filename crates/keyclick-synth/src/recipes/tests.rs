//! Tests for the raw profile recipes (before post-processing).

use super::*;
use crate::mixer::peak;
use crate::rng::create_rng;

fn input() -> RecipeInput {
    RecipeInput::new(6615, 44100.0, 800.0)
}

fn tail_ratio(samples: &[f64]) -> f64 {
    let tail = &samples[samples.len() * 2 / 3..];
    peak(tail) / peak(samples)
}

#[test]
fn test_every_recipe_fills_the_grid() {
    let input = input();
    for profile in Profile::ALL {
        let raw = render_raw(profile, &input, &mut create_rng(1));
        assert_eq!(raw.len(), 6615, "{} length", profile);
        assert!(raw.iter().all(|s| s.is_finite()), "{} not finite", profile);
        assert!(peak(&raw) > 0.0, "{} is silent", profile);
    }
}

#[test]
fn test_recipes_are_reproducible_with_a_seed() {
    let input = input();
    for profile in Profile::ALL {
        let a = render_raw(profile, &input, &mut create_rng(7));
        let b = render_raw(profile, &input, &mut create_rng(7));
        assert_eq!(a, b, "{} differs between identical seeds", profile);
    }
}

#[test]
fn test_jittered_recipes_vary_between_seeds() {
    let input = input();
    for profile in [
        Profile::Blue,
        Profile::Brown,
        Profile::Red,
        Profile::Hard,
        Profile::Mechanical,
        Profile::Thock,
        Profile::Dry,
        Profile::Hacker,
    ] {
        let a = render_raw(profile, &input, &mut create_rng(1));
        let b = render_raw(profile, &input, &mut create_rng(2));
        assert_ne!(a, b, "{} ignores its random source", profile);
    }
}

#[test]
fn test_purely_tonal_recipes_ignore_the_rng() {
    let input = input();
    for profile in [
        Profile::Creamy,
        Profile::Clicky,
        Profile::Silent,
        Profile::Tactile,
        Profile::Typewriter,
        Profile::Lofi,
        Profile::GxFeryn,
        Profile::LeeSin,
    ] {
        let a = render_raw(profile, &input, &mut create_rng(1));
        let b = render_raw(profile, &input, &mut create_rng(2));
        assert_eq!(a, b, "{} should not depend on the seed", profile);
    }
}

#[test]
fn test_tonal_recipes_start_from_silence() {
    // Attack/release envelopes and sines are both zero at t = 0
    let input = input();
    for profile in [Profile::Creamy, Profile::Silent, Profile::Lofi, Profile::GxFeryn] {
        let raw = render_raw(profile, &input, &mut create_rng(1));
        assert_eq!(raw[0], 0.0, "{}", profile);
    }
}

#[test]
fn test_silent_is_pre_attenuated() {
    let input = input();
    let raw = render_raw(Profile::Silent, &input, &mut create_rng(1));
    // 1.1 is the largest possible harmonic sum; the envelope peaks below 1
    assert!(peak(&raw) < 0.5 * 1.1);
}

#[test]
fn test_lofi_tape_stage_bounds_raw_mix() {
    let input = input();
    let raw = render_raw(Profile::Lofi, &input, &mut create_rng(1));
    assert!(peak(&raw) <= 0.7);
}

#[test]
fn test_hard_is_louder_than_red_before_normalization() {
    let input = input();
    let hard = render_raw(Profile::Hard, &input, &mut create_rng(3));
    let red = render_raw(Profile::Red, &input, &mut create_rng(3));
    assert!(peak(&hard) > peak(&red));
}

#[test]
fn test_thock_rings_longer_than_hard() {
    let input = input();
    let thock = render_raw(Profile::Thock, &input, &mut create_rng(4));
    let hard = render_raw(Profile::Hard, &input, &mut create_rng(4));
    assert!(tail_ratio(&thock) > tail_ratio(&hard));
}

#[test]
fn test_recipe_for_dispatches_every_profile() {
    let input = RecipeInput::new(64, 8000.0, 800.0);
    for profile in Profile::ALL {
        let recipe = recipe_for(profile);
        assert_eq!(recipe(&input, &mut create_rng(0)).len(), 64);
    }
}
