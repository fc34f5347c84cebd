//! Core WAV writing and PCM conversion functions.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::format::{WavFormat, WAV_HEADER_LEN};

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Writes a WAV file to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_wav_file(path: &Path, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(&mut writer, format, pcm_data)?;
    writer.flush()
}

/// Quantizes one sample to 16-bit: `round(sample * 32767)`, clamped to the i16 range.
#[inline]
pub fn sample_to_pcm16(sample: f32) -> i16 {
    let scaled = (sample as f64 * 32767.0).round();
    scaled.clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Converts samples to little-endian 16-bit PCM bytes.
///
/// Out-of-range values are clamped rather than wrapped.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        pcm.extend_from_slice(&sample_to_pcm16(sample).to_le_bytes());
    }

    pcm
}
