//! Generator configuration: JSON file values overlaid by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use keyclick_synth::params::{
    DEFAULT_BASE_FREQUENCY, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE,
};
use keyclick_synth::{ProfileSelection, SynthesisParams};
use serde::{Deserialize, Serialize};

/// Directory assets are written to when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_sounds";

/// Every setting of a `generate` run. Unset fields fall back to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Profile name or `all`.
    pub profile: Option<String>,
    /// Click length in seconds.
    pub duration: Option<f64>,
    /// Base frequency in Hz.
    pub frequency: Option<f64>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Output directory.
    pub output: Option<PathBuf>,
    /// Seed for reproducible renders.
    pub seed: Option<u32>,
}

/// A fully resolved and validated `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub selection: ProfileSelection,
    pub params: SynthesisParams,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Fills unset fields from `fallback`; fields already set here win.
    pub fn or(self, fallback: GeneratorConfig) -> Self {
        Self {
            profile: self.profile.or(fallback.profile),
            duration: self.duration.or(fallback.duration),
            frequency: self.frequency.or(fallback.frequency),
            sample_rate: self.sample_rate.or(fallback.sample_rate),
            output: self.output.or(fallback.output),
            seed: self.seed.or(fallback.seed),
        }
    }

    /// Applies built-in defaults and validates the result.
    ///
    /// Profile and parameter errors surface here, before anything is written.
    pub fn resolve(self) -> Result<GenerationPlan> {
        let selection = match self.profile.as_deref() {
            Some(name) => name.parse::<ProfileSelection>()?,
            None => ProfileSelection::All,
        };

        let params = SynthesisParams {
            sample_rate: self.sample_rate.unwrap_or(DEFAULT_SAMPLE_RATE),
            duration_seconds: self.duration.unwrap_or(DEFAULT_DURATION_SECONDS),
            base_frequency: self.frequency.unwrap_or(DEFAULT_BASE_FREQUENCY),
            seed: self.seed,
        };
        params.validate()?;

        Ok(GenerationPlan {
            selection,
            params,
            output_dir: self
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }
}
