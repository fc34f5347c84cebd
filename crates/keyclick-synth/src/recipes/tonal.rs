//! Stylized profiles built from harmonics of the base frequency.

use rand_pcg::Pcg32;

use super::RecipeInput;
use crate::mixer::Mixer;
use crate::synthesis::{
    attack_release, exp_decay, gate, gaussian_bump, mul, Component, NoiseBurst,
};

/// Sum of `(weight, ratio)` harmonics of the base frequency.
fn harmonics(input: &RecipeInput, partials: &[(f64, f64)]) -> Vec<f64> {
    let mut mix = Mixer::new(input.len());
    for &(weight, ratio) in partials {
        mix.add(weight, &input.harmonic(ratio));
    }
    mix.into_samples()
}

/// Harmonic at `ratio` with its own exponential decay, gated to `[start, end)`.
fn ping(input: &RecipeInput, ratio: f64, decay: f64, start: f64, end: f64) -> Vec<f64> {
    let grid = &input.grid;
    let tone = mul(&input.harmonic(ratio), &exp_decay(grid, decay));
    mul(&tone, &gate(grid, start, end))
}

/// Lubed switch: three soft harmonics under a slowly wobbling envelope.
pub(super) fn creamy(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;
    let wobble = grid.map(|t| 1.0 + 0.1 * (t * 30.0).sin());
    let envelope = mul(&attack_release(grid, 20.0, 8.0), &wobble);

    mul(
        &harmonics(input, &[(1.0, 0.9), (0.4, 1.5), (0.2, 2.2)]),
        &envelope,
    )
}

/// Box Jade/Navy: a bright body plus two short high click partials.
pub(super) fn clicky(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 80.0, 20.0);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&input.harmonic(1.4), &envelope))
        .add(0.6, &ping(input, 4.0, 100.0, 0.0, 0.02))
        .add(0.4, &ping(input, 6.0, 120.0, 0.0, 0.015));
    mix.into_samples()
}

/// Dampened switch, attenuated before the shared normalization stage.
pub(super) fn silent(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 25.0, 12.0);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&harmonics(input, &[(1.0, 0.7), (0.1, 1.8)]), &envelope))
        .gain(0.5);
    mix.into_samples()
}

/// Pronounced tactile bump 10 ms into the stroke.
pub(super) fn tactile(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;
    let envelope = attack_release(grid, 35.0, 10.0);
    let bump = gaussian_bump(grid, 0.01, 0.005, 0.8);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&mul(&input.harmonic(0.85), &envelope), &bump))
        .add(0.3, &mul(&input.harmonic(2.3), &envelope));
    mix.into_samples()
}

/// Vintage typewriter: low strike plus a metallic ping.
pub(super) fn typewriter(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 100.0, 20.0);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&input.harmonic(0.5), &envelope))
        .add(0.3, &ping(input, 4.0, 50.0, 0.0, f64::INFINITY));
    mix.into_samples()
}

/// Warm, soft profile with its own tape-style saturation.
pub(super) fn lofi(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 12.0, 5.0);
    let body = harmonics(input, &[(1.0, 0.6), (0.3, 1.2), (0.2, 0.8), (0.05, 0.3)]);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&body, &envelope))
        .map(|x| (x * 1.5).tanh() * 0.7);
    mix.into_samples()
}

/// Smooth gaming switch with a short digital overtone.
pub(super) fn gx_feryn(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 30.0, 10.0);
    let body = harmonics(input, &[(1.0, 1.0), (0.4, 2.1), (0.2, 3.3)]);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&body, &envelope))
        .add(0.1, &ping(input, 5.0, 50.0, 0.0, f64::INFINITY));
    mix.into_samples()
}

/// Sharp strike with a resonant echo after 20 ms.
pub(super) fn lee_sin(input: &RecipeInput, _rng: &mut Pcg32) -> Vec<f64> {
    let envelope = attack_release(&input.grid, 100.0, 25.0);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&input.harmonic(1.3), &envelope))
        .add(0.8, &ping(input, 4.0, 80.0, 0.0, 0.015))
        .add(0.2, &ping(input, 1.5, 15.0, 0.02, f64::INFINITY));
    mix.into_samples()
}

/// Retro terminal: inharmonic partials, discrete glitch noise and a beep.
pub(super) fn hacker(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;
    let envelope = attack_release(grid, 45.0, 15.0);
    let body = harmonics(input, &[(1.0, 1.1), (0.4, 2.7), (0.3, 4.1)]);
    let glitch = NoiseBurst::choice(&[-0.1, 0.0, 0.1]).render(grid, rng);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &mul(&body, &envelope))
        .add(0.3, &mul(&glitch, &envelope))
        .add(0.2, &ping(input, 6.0, 60.0, 0.0, 0.01));
    mix.into_samples()
}
