//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use crate::params::{SynthesisParams, MAX_DURATION_SECONDS, MAX_SAMPLE_RATE};
use super::builder::WavWriter;
use super::format::{WavFormat, WAV_HEADER_LEN};
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{sample_to_pcm16, samples_to_pcm16, write_wav_file, write_wav_to_vec};

fn u16_at(data: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([data[pos], data[pos + 1]])
}

fn u32_at(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

// =========================================================================
// Format
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 1 channel * 2 bytes/sample
    assert_eq!(format.byte_rate(), 88200);
}

// =========================================================================
// PCM conversion
// =========================================================================

#[test]
fn test_samples_to_pcm16_normal_range() {
    let pcm = samples_to_pcm16(&[0.0, 0.5, -0.5]);
    assert_eq!(pcm.len(), 6);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 16384); // round(16383.5)
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16384);
}

#[test]
fn test_sample_to_pcm16_boundary_values() {
    assert_eq!(sample_to_pcm16(1.0), 32767);
    assert_eq!(sample_to_pcm16(-1.0), -32767);
    assert_eq!(sample_to_pcm16(0.8), (0.8f32 as f64 * 32767.0).round() as i16);
}

#[test]
fn test_sample_to_pcm16_clamps_instead_of_wrapping() {
    assert_eq!(sample_to_pcm16(1.5), i16::MAX);
    assert_eq!(sample_to_pcm16(-3.0), i16::MIN);
    assert_eq!(sample_to_pcm16(f32::INFINITY), i16::MAX);
}

// =========================================================================
// Header layout
// =========================================================================

#[test]
fn test_wav_header_layout() {
    let format = WavFormat::mono(22050);
    let pcm = samples_to_pcm16(&[0.1; 10]);
    let wav = write_wav_to_vec(&format, &pcm);

    assert_eq!(wav.len(), WAV_HEADER_LEN + 20);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32_at(&wav, 4), 36 + 20);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32_at(&wav, 16), 16);
    assert_eq!(u16_at(&wav, 20), 1); // PCM
    assert_eq!(u16_at(&wav, 22), 1); // mono
    assert_eq!(u32_at(&wav, 24), 22050);
    assert_eq!(u32_at(&wav, 28), 44100);
    assert_eq!(u16_at(&wav, 32), 2);
    assert_eq!(u16_at(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32_at(&wav, 40), 20);
}

#[test]
fn test_header_at_largest_accepted_params() {
    let params =
        SynthesisParams::new(MAX_DURATION_SECONDS, 800.0).with_sample_rate(MAX_SAMPLE_RATE);
    params.validate().unwrap();
    let pcm = vec![0u8; params.num_samples() * 2];

    let wav = write_wav_to_vec(&WavFormat::mono(params.sample_rate), &pcm);

    assert_eq!(u32_at(&wav, 4), 36 + 11_520_000);
    assert_eq!(u32_at(&wav, 24), 192_000);
    assert_eq!(u32_at(&wav, 28), 384_000);
    assert_eq!(u32_at(&wav, 40), 11_520_000);
    assert_eq!(wav.len(), WAV_HEADER_LEN + 11_520_000);
}

#[test]
fn test_empty_wav_is_header_only() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &[]);
    assert_eq!(wav.len(), WAV_HEADER_LEN);
    assert_eq!(u32_at(&wav, 40), 0);
}

// =========================================================================
// PCM extraction and hashing
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let pcm = samples_to_pcm16(&[0.25, -0.25, 0.5]);
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &pcm);
    assert_eq!(extract_pcm_data(&wav), Some(pcm.as_slice()));
}

#[test]
fn test_extract_pcm_data_rejects_garbage() {
    assert_eq!(extract_pcm_data(b"not a wav"), None);
    let mut bogus = vec![0u8; 64];
    bogus[0..4].copy_from_slice(b"RIFX");
    assert_eq!(extract_pcm_data(&bogus), None);
}

#[test]
fn test_compute_pcm_hash_matches_result_hash() {
    let samples = [0.1f32, -0.2, 0.3, -0.4];
    let result = WavResult::from_mono(&samples, 44100);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(WavWriter::mono(44100).pcm_hash(&samples), result.pcm_hash);
}

#[test]
fn test_pcm_hash_different_for_different_samples() {
    let a = WavResult::from_mono(&[0.1, 0.2], 44100);
    let b = WavResult::from_mono(&[0.1, 0.3], 44100);
    assert_ne!(a.pcm_hash, b.pcm_hash);
}

#[test]
fn test_wav_result_metadata() {
    let result = WavResult::from_mono(&[0.0; 4410], 44100);
    assert_eq!(result.num_samples, 4410);
    assert_eq!(result.sample_rate, 44100);
    assert!((result.duration_seconds() - 0.1).abs() < 1e-12);
    assert_eq!(result.wav_data.len(), WAV_HEADER_LEN + 4410 * 2);
}

#[test]
fn test_writer_matches_result_bytes() {
    let samples = [0.3f32; 32];
    let writer = WavWriter::mono(48000);
    assert_eq!(writer.format(), WavFormat::mono(48000));
    assert_eq!(writer.write(&samples), WavResult::from_mono(&samples, 48000).wav_data);
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn test_write_wav_file_reads_back_with_hound() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("click.wav");
    let samples: Vec<f32> = (0..100).map(|i| (i as f32 / 100.0) - 0.5).collect();

    WavWriter::mono(44100).write_file(&path, &samples).unwrap();

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration(), 100);

    let decoded: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
    let expected: Vec<i16> = samples.iter().map(|&s| sample_to_pcm16(s)).collect();
    assert_eq!(decoded, expected);
}

#[test]
fn test_write_wav_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("click.wav");
    let writer = WavWriter::mono(8000);

    writer.write_file(&path, &[0.5; 1000]).unwrap();
    writer.write_file(&path, &[0.5; 10]).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), (WAV_HEADER_LEN + 20) as u64);
}

#[test]
fn test_write_wav_file_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist").join("click.wav");
    let err = write_wav_file(&path, &WavFormat::mono(44100), &[0, 0]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
