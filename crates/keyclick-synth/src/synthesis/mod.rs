//! Signal building blocks shared by every profile recipe.
//!
//! - `resonator` - Damped sinusoid with per-render frequency jitter and an
//!   optional activation window (springs, plates, housings ringing down)
//! - `noise` - Gated, decaying noise bursts (friction, scratch, glitches)
//! - `envelope` - Attack/release envelopes, decays, time gates and bumps
//!
//! Every primitive evaluates over a [`TimeGrid`] and returns a full-length
//! buffer; recipes compose them by elementwise multiplication and weighted
//! sums, never by per-sample branching.

pub mod envelope;
pub mod noise;
pub mod resonator;

use std::f64::consts::PI;

use rand_pcg::Pcg32;

pub use envelope::{attack_release, exp_decay, gate, gaussian_bump};
pub use noise::{NoiseBurst, NoiseKind};
pub use resonator::{jitter, Resonator};

/// Sample times `i / sample_rate` for `i` in `0..num_samples`.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times: Vec<f64>,
    sample_rate: f64,
}

impl TimeGrid {
    /// Creates the grid for `num_samples` samples at `sample_rate` Hz.
    pub fn new(num_samples: usize, sample_rate: f64) -> Self {
        let times = (0..num_samples).map(|i| i as f64 / sample_rate).collect();
        Self { times, sample_rate }
    }

    /// Sample times in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the grid has no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Evaluates `f` at every sample time.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Vec<f64> {
        self.times.iter().map(|&t| f(t)).collect()
    }
}

/// A signal component that renders a full buffer over a time grid.
pub trait Component {
    /// Renders the component.
    ///
    /// # Arguments
    /// * `grid` - Sample times to evaluate at
    /// * `rng` - Random source for noise draws
    fn render(&self, grid: &TimeGrid, rng: &mut Pcg32) -> Vec<f64>;
}

/// Pure sine `sin(2π·f·t)`.
pub fn sine(grid: &TimeGrid, frequency: f64) -> Vec<f64> {
    let w = 2.0 * PI * frequency;
    grid.map(|t| (w * t).sin())
}

/// Elementwise product of two equal-length buffers.
pub fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

/// Multiplies every sample by `gain` in place.
pub fn scale(samples: &mut [f64], gain: f64) {
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}
