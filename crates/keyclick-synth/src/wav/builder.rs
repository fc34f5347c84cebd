//! WAV writer bound to a fixed format.

use std::io;
use std::path::Path;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_file, write_wav_to_vec};

/// Writes mono 16-bit WAV data at a fixed sample rate.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a mono writer.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Returns the output format.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes samples to a byte vector.
    pub fn write(&self, samples: &[f32]) -> Vec<u8> {
        write_wav_to_vec(&self.format, &samples_to_pcm16(samples))
    }

    /// Encodes samples straight to `path`.
    pub fn write_file(&self, path: &Path, samples: &[f32]) -> io::Result<()> {
        write_wav_file(path, &self.format, &samples_to_pcm16(samples))
    }

    /// BLAKE3 hash of the PCM data (not the full WAV file).
    pub fn pcm_hash(&self, samples: &[f32]) -> String {
        blake3::hash(&samples_to_pcm16(samples)).to_hex().to_string()
    }
}
