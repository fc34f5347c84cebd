//! Synthesis parameters shared by every profile.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};
use crate::profile::Profile;
use crate::rng::{create_entropy_rng, create_rng, derive_component_seed};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default click length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 0.15;

/// Default base frequency in Hz for the harmonic profiles.
pub const DEFAULT_BASE_FREQUENCY: f64 = 800.0;

/// Upper bound on a single click's length.
pub const MAX_DURATION_SECONDS: f64 = 30.0;

/// Highest accepted sample rate in Hz.
///
/// At this rate a `MAX_DURATION_SECONDS` render still fits the 32-bit WAV size fields.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Parameters for one synthesis invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Base frequency in Hz.
    pub base_frequency: f64,
    /// Optional seed; `None` draws from OS entropy on every render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            seed: None,
        }
    }
}

impl SynthesisParams {
    /// Creates parameters with the given duration and base frequency at the default rate.
    pub fn new(duration_seconds: f64, base_frequency: f64) -> Self {
        Self {
            duration_seconds,
            base_frequency,
            ..Self::default()
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets a fixed seed for reproducible renders.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of samples a render produces: `round(sample_rate * duration)`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Checks every parameter before any synthesis happens.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_param(
                "sample_rate",
                "must be a positive number of Hz, got 0",
            ));
        }
        if self.sample_rate > MAX_SAMPLE_RATE {
            return Err(SynthError::invalid_param(
                "sample_rate",
                format!(
                    "must be <= {} Hz, got {}",
                    MAX_SAMPLE_RATE, self.sample_rate
                ),
            ));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SynthError::invalid_param(
                "duration_seconds",
                format!("must be positive, got {}", self.duration_seconds),
            ));
        }
        if self.duration_seconds > MAX_DURATION_SECONDS {
            return Err(SynthError::invalid_param(
                "duration_seconds",
                format!(
                    "must be <= {} seconds, got {}",
                    MAX_DURATION_SECONDS, self.duration_seconds
                ),
            ));
        }
        if !self.base_frequency.is_finite() || self.base_frequency <= 0.0 {
            return Err(SynthError::invalid_param(
                "base_frequency",
                format!("must be positive, got {}", self.base_frequency),
            ));
        }
        if self.num_samples() == 0 {
            return Err(SynthError::invalid_param(
                "duration_seconds",
                format!(
                    "{} seconds at {} Hz is shorter than one sample",
                    self.duration_seconds, self.sample_rate
                ),
            ));
        }
        Ok(())
    }

    /// Returns the random source to use for `profile`.
    ///
    /// Seeded parameters give each profile its own stream keyed by name, so a
    /// seeded batch renders the same files regardless of ordering.
    pub fn rng_for(&self, profile: Profile) -> Pcg32 {
        match self.seed {
            Some(seed) => create_rng(derive_component_seed(seed, profile.name())),
            None => create_entropy_rng(),
        }
    }
}
