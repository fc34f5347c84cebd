//! Main entry points for click synthesis.
//!
//! A render validates its parameters, runs the profile's recipe on a fresh
//! time grid, then pushes the raw mix through the shared post-processing
//! pipeline. Nothing here touches the filesystem except [`save`] and the
//! batch renderer in [`batch`].

mod batch;


use std::path::Path;

use rand_pcg::Pcg32;
use tracing::debug;

use crate::error::{SynthError, SynthResult};
use crate::mixer::finalize;
use crate::params::SynthesisParams;
use crate::profile::Profile;
use crate::recipes::{render_raw, RecipeInput};
use crate::wav::{WavResult, WavWriter};

pub use batch::{generate_catalog, AssetOutcome, BatchReport};

/// A post-processed mono click, ready to be quantized.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    /// Wraps already post-processed samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Samples in `[-1, 1]`.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Encodes the waveform as 16-bit mono WAV.
    pub fn to_wav(&self) -> WavResult {
        WavResult::from_mono(&self.samples, self.sample_rate)
    }

    /// Writes the waveform to `path`. See [`save`].
    pub fn save(&self, path: &Path) -> SynthResult<()> {
        save(self, path)
    }

    /// Returns the samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// Renders `profile` using the supplied random source.
///
/// Parameters are validated before any synthesis happens. The same seeded
/// `rng` state always produces the same waveform.
pub fn generate(
    profile: Profile,
    params: &SynthesisParams,
    rng: &mut Pcg32,
) -> SynthResult<Waveform> {
    params.validate()?;

    let input = RecipeInput::new(
        params.num_samples(),
        params.sample_rate as f64,
        params.base_frequency,
    );
    let mut raw = render_raw(profile, &input, rng);
    finalize(&mut raw);

    let waveform = Waveform::new(
        raw.into_iter().map(|s| s as f32).collect(),
        params.sample_rate,
    );

    debug!(
        profile = %profile,
        samples = waveform.len(),
        peak = waveform.peak(),
        "rendered profile"
    );

    Ok(waveform)
}

/// Renders a profile given by name.
///
/// Unknown names fail with [`SynthError::InvalidProfile`] before anything
/// else is checked.
pub fn generate_by_name(
    name: &str,
    params: &SynthesisParams,
    rng: &mut Pcg32,
) -> SynthResult<Waveform> {
    let profile: Profile = name.parse()?;
    generate(profile, params, rng)
}

/// Renders `profile` with the random source selected by `params.seed`.
pub fn render(profile: Profile, params: &SynthesisParams) -> SynthResult<Waveform> {
    let mut rng = params.rng_for(profile);
    generate(profile, params, &mut rng)
}

/// Writes `waveform` as a mono 16-bit WAV file, overwriting any existing file.
///
/// The parent directory must already exist.
pub fn save(waveform: &Waveform, path: &Path) -> SynthResult<()> {
    WavWriter::mono(waveform.sample_rate)
        .write_file(path, &waveform.samples)
        .map_err(|e| SynthError::io(path, e))
}
