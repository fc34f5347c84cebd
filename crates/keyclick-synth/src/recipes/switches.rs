//! Physically modelled switches.
//!
//! Components are drawn in a fixed order (frequency jitter, then noise) so a
//! seeded render always consumes the RNG the same way.

use rand_pcg::Pcg32;

use super::RecipeInput;
use crate::mixer::Mixer;
use crate::synthesis::{Component, NoiseBurst, Resonator};

/// Cherry MX Blue: sharp impact, crisp spring click, housing resonance and
/// a brief burst of plastic friction.
pub(super) fn blue(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let impact = Resonator::jittered(rng, 2000.0, 200.0, 80.0).until(0.005);
    let spring = Resonator::jittered(rng, 800.0, 50.0, 40.0).until(0.01);
    let housing = Resonator::jittered(rng, 300.0, 30.0, 12.0);
    let friction = NoiseBurst::normal(0.1, 25.0).until(0.02);

    let mut mix = Mixer::new(input.len());
    mix.add(0.6, &impact.render(grid, rng))
        .add(0.8, &spring.render(grid, rng))
        .add(0.3, &housing.render(grid, rng))
        .add(0.2, &friction.render(grid, rng));
    mix.into_samples()
}

/// Cherry MX Brown: soft tactile bump, stem slide and a late bottom-out.
pub(super) fn brown(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let bump = Resonator::jittered(rng, 1200.0, 100.0, 60.0).until(0.008);
    let slide = Resonator::jittered(rng, 600.0, 40.0, 20.0);
    let bottom = Resonator::jittered(rng, 400.0, 50.0, 30.0).window(0.02, 0.035);
    let friction = NoiseBurst::normal(0.05, 20.0);

    let mut mix = Mixer::new(input.len());
    mix.add(0.7, &bump.render(grid, rng))
        .add(0.4, &slide.render(grid, rng))
        .add(0.5, &bottom.render(grid, rng))
        .add(0.15, &friction.render(grid, rng));
    mix.into_samples()
}

/// Cherry MX Red: linear stem travel and a muffled bottom-out.
pub(super) fn red(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let stem = Resonator::jittered(rng, 500.0, 30.0, 15.0);
    let bottom = Resonator::jittered(rng, 350.0, 40.0, 40.0).window(0.025, 0.04);
    let friction = NoiseBurst::normal(0.03, 18.0);

    let mut mix = Mixer::new(input.len());
    mix.add(0.4, &stem.render(grid, rng))
        .add(0.6, &bottom.render(grid, rng))
        .add(0.1, &friction.render(grid, rng));
    mix.into_samples()
}

/// Aggressive metal-on-metal strike: eight fast, heavily weighted components.
pub(super) fn hard(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let impact = Resonator::jittered(rng, 3500.0, 400.0, 120.0).until(0.003);
    let spring = Resonator::jittered(rng, 1200.0, 150.0, 60.0).until(0.008);
    let bump = Resonator::jittered(rng, 2000.0, 200.0, 80.0).until(0.006);
    let bottom = Resonator::jittered(rng, 800.0, 100.0, 40.0).window(0.015, 0.03);
    let plate = Resonator::jittered(rng, 400.0, 50.0, 20.0);
    let metal = Resonator::jittered(rng, 4000.0, 500.0, 100.0).until(0.004);
    let scratch = NoiseBurst::uniform(0.3, 50.0);
    let case = Resonator::jittered(rng, 180.0, 20.0, 12.0);

    let mut mix = Mixer::new(input.len());
    mix.add(1.0, &impact.render(grid, rng))
        .add(0.9, &spring.render(grid, rng))
        .add(0.8, &bump.render(grid, rng))
        .add(0.7, &bottom.render(grid, rng))
        .add(0.6, &plate.render(grid, rng))
        .add(0.5, &metal.render(grid, rng))
        .add(0.4, &scratch.render(grid, rng))
        .add(0.5, &case.render(grid, rng));
    mix.into_samples()
}

/// Buckling spring: spring snap, metal contact, keycap knock and plate ring.
pub(super) fn mechanical(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let spring = Resonator::jittered(rng, 1800.0, 150.0, 50.0).until(0.012);
    let metal = Resonator::jittered(rng, 3000.0, 300.0, 100.0).until(0.003);
    let keycap = Resonator::jittered(rng, 800.0, 80.0, 25.0);
    let plate = Resonator::jittered(rng, 200.0, 20.0, 8.0);
    let noise = NoiseBurst::normal(0.15, 30.0);

    let mut mix = Mixer::new(input.len());
    mix.add(0.8, &spring.render(grid, rng))
        .add(0.4, &metal.render(grid, rng))
        .add(0.6, &keycap.render(grid, rng))
        .add(0.3, &plate.render(grid, rng))
        .add(0.3, &noise.render(grid, rng));
    mix.into_samples()
}

/// Deep thock: low impact, dome collapse, slow case resonance and a muffled tick.
pub(super) fn thock(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let impact = Resonator::jittered(rng, 250.0, 25.0, 15.0);
    let dome = Resonator::jittered(rng, 400.0, 30.0, 30.0).until(0.015);
    let case = Resonator::jittered(rng, 120.0, 15.0, 5.0);
    let muffled = Resonator::jittered(rng, 1000.0, 100.0, 80.0).until(0.005);

    let mut mix = Mixer::new(input.len());
    mix.add(0.8, &impact.render(grid, rng))
        .add(0.5, &dome.render(grid, rng))
        .add(0.6, &case.render(grid, rng))
        .add(0.2, &muffled.render(grid, rng));
    mix.into_samples()
}

/// Dry, unlubricated switch: scratchy stem, two friction layers, sharp
/// impact and housing rattle.
pub(super) fn dry(input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    let grid = &input.grid;

    let scratch = Resonator::jittered(rng, 1500.0, 200.0, 35.0);
    let friction_high = NoiseBurst::uniform(0.2, 40.0);
    let friction_low = NoiseBurst::uniform(0.1, 25.0);
    let impact = Resonator::jittered(rng, 2500.0, 300.0, 90.0).until(0.004);
    let rattle = Resonator::jittered(rng, 700.0, 70.0, 20.0);

    let mut mix = Mixer::new(input.len());
    mix.add(0.6, &scratch.render(grid, rng))
        .add(0.4, &friction_high.render(grid, rng))
        .add(0.3, &friction_low.render(grid, rng))
        .add(0.7, &impact.render(grid, rng))
        .add(0.4, &rattle.render(grid, rng));
    mix.into_samples()
}
