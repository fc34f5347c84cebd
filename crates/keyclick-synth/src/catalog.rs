//! Reading a rendered asset directory back.
//!
//! Consumers locate sounds purely by the `keyboard_<name>.wav` naming
//! convention, so the catalog is the profile list joined with a directory.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{SynthError, SynthResult};
use crate::profile::Profile;

/// Path of `profile`'s asset inside `dir`.
pub fn asset_path(dir: &Path, profile: Profile) -> PathBuf {
    dir.join(profile.asset_file_name())
}

/// Header information of a WAV asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetInfo {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    pub frames: u32,
    pub duration_seconds: f64,
}

impl AssetInfo {
    /// Returns true for the mono 16-bit layout the engine writes.
    pub fn is_mono_pcm16(&self) -> bool {
        self.channels == 1 && self.bits_per_sample == 16
    }
}

/// Reads the header of the WAV file at `path`.
pub fn read_asset_info(path: &Path) -> SynthResult<AssetInfo> {
    let reader = hound::WavReader::open(path).map_err(|e| SynthError::from_hound(path, e))?;
    let spec = reader.spec();
    let frames = reader.duration();

    Ok(AssetInfo {
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        sample_rate: spec.sample_rate,
        frames,
        duration_seconds: frames as f64 / spec.sample_rate as f64,
    })
}

/// State of one profile's asset on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    /// File exists and parsed.
    Present { info: AssetInfo },
    /// No file at the expected path.
    Missing,
    /// File exists but could not be read.
    Unreadable { error: String },
}

/// One profile's slot in an asset directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub profile: Profile,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: AssetStatus,
}

impl CatalogEntry {
    /// Returns true if the asset is present and readable.
    pub fn is_present(&self) -> bool {
        matches!(self.status, AssetStatus::Present { .. })
    }

    /// Header info, if the asset is present.
    pub fn info(&self) -> Option<&AssetInfo> {
        match &self.status {
            AssetStatus::Present { info } => Some(info),
            _ => None,
        }
    }
}

/// Every profile's asset status in one directory, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundCatalog {
    dir: PathBuf,
    entries: Vec<CatalogEntry>,
}

impl SoundCatalog {
    /// Checks `dir` for every profile's asset.
    ///
    /// A missing directory is not an error; every entry is then `Missing`.
    pub fn scan(dir: &Path) -> Self {
        let entries = Profile::ALL
            .iter()
            .map(|&profile| {
                let path = asset_path(dir, profile);
                let status = if !path.is_file() {
                    AssetStatus::Missing
                } else {
                    match read_asset_info(&path) {
                        Ok(info) => AssetStatus::Present { info },
                        Err(e) => AssetStatus::Unreadable {
                            error: e.to_string(),
                        },
                    }
                };
                CatalogEntry {
                    profile,
                    path,
                    status,
                }
            })
            .collect();

        Self {
            dir: dir.to_path_buf(),
            entries,
        }
    }

    /// The scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entry for `profile`.
    pub fn get(&self, profile: Profile) -> &CatalogEntry {
        &self.entries[profile.index()]
    }

    /// Profiles that need to be (re)generated.
    pub fn missing(&self) -> Vec<Profile> {
        self.entries
            .iter()
            .filter(|e| !e.is_present())
            .map(|e| e.profile)
            .collect()
    }

    /// Returns true if every profile has a readable asset.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(CatalogEntry::is_present)
    }
}
