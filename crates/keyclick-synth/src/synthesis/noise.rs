//! Noise bursts for friction, scratch and glitch transients.

use rand::Rng;
use rand_pcg::Pcg32;

use super::{Component, TimeGrid};
use crate::rng::gaussian;

/// Distribution the raw noise is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseKind {
    /// Zero-mean normal noise with the given standard deviation.
    Normal { std_dev: f64 },
    /// Uniform noise in `[-amplitude, amplitude)`.
    Uniform { amplitude: f64 },
    /// Each sample picks one of the listed values with equal probability.
    Choice { values: Vec<f64> },
}

/// Draws `num_samples` raw noise samples.
pub fn draw_noise(kind: &NoiseKind, num_samples: usize, rng: &mut Pcg32) -> Vec<f64> {
    match kind {
        NoiseKind::Normal { std_dev } => (0..num_samples)
            .map(|_| gaussian(rng, 0.0, *std_dev))
            .collect(),
        NoiseKind::Uniform { amplitude } => (0..num_samples)
            .map(|_| (rng.gen::<f64>() * 2.0 - 1.0) * amplitude)
            .collect(),
        NoiseKind::Choice { values } if values.is_empty() => vec![0.0; num_samples],
        NoiseKind::Choice { values } => (0..num_samples)
            .map(|_| values[rng.gen_range(0..values.len())])
            .collect(),
    }
}

/// Noise shaped by an exponential decay and an optional window.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBurst {
    /// Noise distribution.
    pub kind: NoiseKind,
    /// Decay rate in 1/s (0 = no decay).
    pub decay: f64,
    /// Activation window `[start, end)` in seconds.
    pub window: Option<(f64, f64)>,
}

impl NoiseBurst {
    /// Normal noise burst.
    pub fn normal(std_dev: f64, decay: f64) -> Self {
        Self {
            kind: NoiseKind::Normal { std_dev },
            decay,
            window: None,
        }
    }

    /// Uniform noise burst in `[-amplitude, amplitude)`.
    pub fn uniform(amplitude: f64, decay: f64) -> Self {
        Self {
            kind: NoiseKind::Uniform { amplitude },
            decay,
            window: None,
        }
    }

    /// Discrete noise drawn from `values`, undecayed.
    pub fn choice(values: &[f64]) -> Self {
        Self {
            kind: NoiseKind::Choice {
                values: values.to_vec(),
            },
            decay: 0.0,
            window: None,
        }
    }

    /// Restricts the burst to `[0, end)`.
    pub fn until(mut self, end: f64) -> Self {
        self.window = Some((0.0, end));
        self
    }
}

impl Component for NoiseBurst {
    fn render(&self, grid: &TimeGrid, rng: &mut Pcg32) -> Vec<f64> {
        // Draw the full buffer first so the RNG stream does not depend on the window
        let raw = draw_noise(&self.kind, grid.len(), rng);
        raw.iter()
            .zip(grid.times())
            .map(|(&n, &t)| {
                let open = match self.window {
                    Some((start, end)) => t >= start && t < end,
                    None => true,
                };
                if open {
                    n * (-t * self.decay).exp()
                } else {
                    0.0
                }
            })
            .collect()
    }
}
