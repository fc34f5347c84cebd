//! Damped resonators.
//!
//! A resonator models a physical element (spring, plate, keycap, housing)
//! ringing down after an impulse: `exp(-t·decay) · sin(2π·f·t)`, optionally
//! restricted to an activation window.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use super::{Component, TimeGrid};
use crate::rng::gaussian;

/// Perturbs a nominal frequency by one normal draw.
///
/// Called once per component per render, so successive renders of the same
/// profile differ slightly, like successive keystrokes on a real board.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, nominal: f64, std_dev: f64) -> f64 {
    gaussian(rng, nominal, std_dev)
}

/// Exponentially damped sinusoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resonator {
    /// Center frequency in Hz.
    pub frequency: f64,
    /// Decay rate in 1/s.
    pub decay: f64,
    /// Activation window `[start, end)` in seconds.
    pub window: Option<(f64, f64)>,
}

impl Resonator {
    /// Creates an ungated resonator at a fixed frequency.
    pub fn new(frequency: f64, decay: f64) -> Self {
        Self {
            frequency,
            decay,
            window: None,
        }
    }

    /// Creates a resonator whose frequency is jittered around `nominal`.
    pub fn jittered<R: Rng + ?Sized>(rng: &mut R, nominal: f64, std_dev: f64, decay: f64) -> Self {
        Self::new(jitter(rng, nominal, std_dev), decay)
    }

    /// Restricts the resonator to `[start, end)`.
    pub fn window(mut self, start: f64, end: f64) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Restricts the resonator to `[0, end)`.
    pub fn until(self, end: f64) -> Self {
        self.window(0.0, end)
    }

    /// Evaluates the resonator over the grid.
    pub fn evaluate(&self, grid: &TimeGrid) -> Vec<f64> {
        let w = 2.0 * PI * self.frequency;
        let decay = self.decay;
        match self.window {
            None => grid.map(|t| (-t * decay).exp() * (w * t).sin()),
            Some((start, end)) => grid.map(|t| {
                if t >= start && t < end {
                    (-t * decay).exp() * (w * t).sin()
                } else {
                    0.0
                }
            }),
        }
    }
}

impl Component for Resonator {
    fn render(&self, grid: &TimeGrid, _rng: &mut Pcg32) -> Vec<f64> {
        self.evaluate(grid)
    }
}
