//! Per-profile signal recipes.
//!
//! Each profile is one function returning the raw (pre-normalization) mix.
//! Recipes are split by construction style:
//!
//! - `switches` - physically modelled switches built from jittered
//!   resonators and noise bursts (blue, brown, red, hard, mechanical,
//!   thock, dry)
//! - `tonal` - stylized profiles built from harmonics of the base frequency
//!   under an attack/release envelope (creamy, clicky, silent, tactile,
//!   typewriter, lofi, gx_feryn, lee_sin, hacker)
//!
//! Frequencies, decay rates, windows and weights are the acoustic signature
//! of each profile; change them only to change how a switch sounds.

mod switches;
mod tonal;

#[cfg(test)]
mod tests;

use rand_pcg::Pcg32;

use crate::profile::Profile;
use crate::synthesis::{sine, TimeGrid};

/// Inputs every recipe receives.
#[derive(Debug, Clone)]
pub struct RecipeInput {
    /// Sample times.
    pub grid: TimeGrid,
    /// Base frequency in Hz (used by the tonal recipes).
    pub base_frequency: f64,
}

impl RecipeInput {
    /// Creates recipe input for `num_samples` at `sample_rate`.
    pub fn new(num_samples: usize, sample_rate: f64, base_frequency: f64) -> Self {
        Self {
            grid: TimeGrid::new(num_samples, sample_rate),
            base_frequency,
        }
    }

    /// Sine at `ratio` times the base frequency.
    pub(crate) fn harmonic(&self, ratio: f64) -> Vec<f64> {
        sine(&self.grid, self.base_frequency * ratio)
    }

    pub(crate) fn len(&self) -> usize {
        self.grid.len()
    }
}

/// Signature shared by all recipes.
pub type RecipeFn = fn(&RecipeInput, &mut Pcg32) -> Vec<f64>;

/// Returns the recipe for `profile`.
pub fn recipe_for(profile: Profile) -> RecipeFn {
    match profile {
        Profile::Blue => switches::blue,
        Profile::Brown => switches::brown,
        Profile::Red => switches::red,
        Profile::Hard => switches::hard,
        Profile::Mechanical => switches::mechanical,
        Profile::Thock => switches::thock,
        Profile::Dry => switches::dry,
        Profile::Creamy => tonal::creamy,
        Profile::Clicky => tonal::clicky,
        Profile::Silent => tonal::silent,
        Profile::Tactile => tonal::tactile,
        Profile::Typewriter => tonal::typewriter,
        Profile::Lofi => tonal::lofi,
        Profile::GxFeryn => tonal::gx_feryn,
        Profile::LeeSin => tonal::lee_sin,
        Profile::Hacker => tonal::hacker,
    }
}

/// Renders the raw mix for `profile`.
pub fn render_raw(profile: Profile, input: &RecipeInput, rng: &mut Pcg32) -> Vec<f64> {
    recipe_for(profile)(input, rng)
}
