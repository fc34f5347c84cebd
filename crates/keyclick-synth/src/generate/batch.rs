//! Batch rendering of the profile catalog into an asset directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::render;
use crate::catalog::asset_path;
use crate::error::SynthResult;
use crate::params::SynthesisParams;
use crate::profile::{Profile, ProfileSelection};
use crate::wav::WavWriter;

/// Result of rendering and saving a single profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetOutcome {
    /// Profile that was rendered.
    pub profile: Profile,
    /// Destination file.
    pub path: PathBuf,
    /// Whether the file was written.
    pub success: bool,
    /// Number of frames written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<usize>,
    /// BLAKE3 hash of the written PCM data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Error message if the profile failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Render plus write time in milliseconds.
    pub duration_ms: u64,
}

/// Per-profile results of a batch, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Directory the assets were written to.
    pub output_dir: PathBuf,
    /// Parameters every profile was rendered with.
    pub params: SynthesisParams,
    /// Profiles attempted.
    pub total: usize,
    /// Profiles written successfully.
    pub succeeded: usize,
    /// Profiles that failed.
    pub failed: usize,
    /// One outcome per profile.
    pub outcomes: Vec<AssetOutcome>,
}

impl BatchReport {
    fn new(output_dir: PathBuf, params: SynthesisParams, outcomes: Vec<AssetOutcome>) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            output_dir,
            params,
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            outcomes,
        }
    }

    /// Returns true if every profile was written.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }

    /// Outcome for `profile`, if it was part of the batch.
    pub fn outcome(&self, profile: Profile) -> Option<&AssetOutcome> {
        self.outcomes.iter().find(|o| o.profile == profile)
    }
}

/// Renders every selected profile and saves it as `<dir>/keyboard_<name>.wav`.
///
/// Parameters are validated once up front. After that a failing profile is
/// recorded in the report and the rest of the batch still runs. Profiles are
/// rendered in parallel; the report is in catalog order.
///
/// `output_dir` must already exist.
pub fn generate_catalog(
    selection: ProfileSelection,
    params: &SynthesisParams,
    output_dir: &Path,
) -> SynthResult<BatchReport> {
    params.validate()?;

    let profiles = selection.profiles();
    debug!(
        selection = %selection,
        count = profiles.len(),
        dir = %output_dir.display(),
        "rendering batch"
    );

    let outcomes: Vec<AssetOutcome> = profiles
        .par_iter()
        .map(|&profile| render_asset(profile, params, output_dir))
        .collect();

    Ok(BatchReport::new(output_dir.to_path_buf(), *params, outcomes))
}

fn render_asset(profile: Profile, params: &SynthesisParams, output_dir: &Path) -> AssetOutcome {
    let start = Instant::now();
    let path = asset_path(output_dir, profile);

    let result = render(profile, params).and_then(|waveform| {
        waveform.save(&path)?;
        let hash = WavWriter::mono(waveform.sample_rate()).pcm_hash(waveform.samples());
        Ok((waveform.len(), hash))
    });
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok((frames, hash)) => AssetOutcome {
            profile,
            path,
            success: true,
            frames: Some(frames),
            pcm_hash: Some(hash),
            error: None,
            duration_ms,
        },
        Err(e) => {
            warn!(profile = %profile, code = e.code(), error = %e, "profile failed");
            AssetOutcome {
                profile,
                path,
                success: false,
                frames: None,
                pcm_hash: None,
                error: Some(e.to_string()),
                duration_ms,
            }
        }
    }
}
