//! Error types for the synthesis engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering or persisting a keyboard sound.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Requested profile is not part of the catalog.
    #[error("unknown profile '{name}' (expected one of: {expected})")]
    InvalidProfile {
        /// The name that failed to parse.
        name: String,
        /// Comma-separated list of valid profile names.
        expected: String,
    },

    /// Invalid synthesis parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Writing or reading a sound asset failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not a readable WAV asset.
    #[error("malformed asset {}: {message}", path.display())]
    MalformedAsset {
        /// Offending file.
        path: PathBuf,
        /// What the WAV reader rejected.
        message: String,
    },
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid profile error listing the catalog.
    pub fn invalid_profile(name: impl Into<String>) -> Self {
        let expected = crate::profile::Profile::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self::InvalidProfile {
            name: name.into(),
            expected,
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Converts a WAV reader error for `path`.
    pub fn from_hound(path: impl Into<PathBuf>, err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(source) => Self::io(path, source),
            other => Self::MalformedAsset {
                path: path.into(),
                message: other.to_string(),
            },
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidProfile { .. } => "SYNTH_001",
            SynthError::InvalidParameter { .. } => "SYNTH_002",
            SynthError::Io { .. } => "SYNTH_003",
            SynthError::MalformedAsset { .. } => "SYNTH_004",
        }
    }

    /// Error category used in reports.
    pub fn category(&self) -> &'static str {
        match self {
            SynthError::InvalidProfile { .. } | SynthError::InvalidParameter { .. } => "input",
            SynthError::Io { .. } | SynthError::MalformedAsset { .. } => "io",
        }
    }
}
