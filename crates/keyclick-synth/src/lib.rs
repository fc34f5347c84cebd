//! Keyclick Synthesis Engine
//!
//! Procedurally renders mechanical keyboard keystroke sounds without any
//! recorded samples. Each of the 16 profiles is a fixed mix of damped
//! resonators, noise bursts and harmonic tones that imitates one switch type.
//!
//! # Pipeline
//!
//! 1. The profile's recipe sums its components on a time grid of
//!    `round(sample_rate * duration)` samples.
//! 2. The raw mix is peak-normalized to 0.7.
//! 3. Soft saturation `tanh(1.2x) * 0.8` bounds every sample to ±0.8.
//! 4. Samples are quantized to 16-bit PCM and written as a mono WAV file.
//!
//! # Randomness
//!
//! Resonator frequencies are jittered and noise is drawn fresh on every
//! render, so two unseeded renders of the same profile differ slightly.
//! Passing a seed (or an explicit [`rand_pcg::Pcg32`]) makes the output
//! byte-identical across runs.
//!
//! # Example
//!
//! ```no_run
//! use keyclick_synth::{render, Profile, SynthesisParams};
//!
//! let params = SynthesisParams::default().with_seed(42);
//! let click = render(Profile::Thock, &params)?;
//! click.save(std::path::Path::new("keyboard_thock.wav"))?;
//! # Ok::<(), keyclick_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`render()`] - Render a single profile
//! - [`generate_catalog()`] - Render and save a set of profiles
//! - [`catalog`] - Inspect an asset directory
//! - [`synthesis`] - Resonators, noise bursts and envelopes
//! - [`recipes`] - Per-profile component mixes
//! - [`mixer`] - Weighted mixing and post-processing
//! - [`rng`] - PCG32 construction and seed derivation
//! - [`wav`] - 16-bit mono WAV writer

pub mod catalog;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod params;
pub mod profile;
pub mod recipes;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use catalog::{asset_path, read_asset_info, AssetInfo, CatalogEntry, SoundCatalog};
pub use error::{SynthError, SynthResult};
pub use generate::{
    generate, generate_by_name, generate_catalog, render, save, AssetOutcome, BatchReport,
    Waveform,
};
pub use params::SynthesisParams;
pub use profile::{Profile, ProfileSelection};
pub use wav::{WavResult, WavWriter};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_full_generation_pipeline() {
        let params = SynthesisParams::default();
        let wave = generate(Profile::Blue, &params, &mut create_rng(42)).expect("generation");
        let wav = wave.to_wav();

        assert_eq!(wav.num_samples, 6615);
        assert_eq!(wav.sample_rate, 44100);
        assert_eq!(&wav.wav_data[0..4], b"RIFF");
        assert_eq!(&wav.wav_data[8..12], b"WAVE");
    }

    #[test]
    fn test_generation_determinism() {
        let params = SynthesisParams::default().with_seed(42);

        let wav1 = render(Profile::Hard, &params).expect("first").to_wav();
        let wav2 = render(Profile::Hard, &params).expect("second").to_wav();

        assert_eq!(wav1.pcm_hash, wav2.pcm_hash);
        assert_eq!(wav1.wav_data, wav2.wav_data);
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let a = render(Profile::Dry, &SynthesisParams::default().with_seed(1)).unwrap();
        let b = render(Profile::Dry, &SynthesisParams::default().with_seed(2)).unwrap();
        assert_ne!(a.to_wav().pcm_hash, b.to_wav().pcm_hash);
    }

    #[test]
    fn test_all_profiles_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let params = SynthesisParams::new(0.05, 600.0).with_sample_rate(22050);

        let report = generate_catalog(ProfileSelection::All, &params, dir.path()).unwrap();
        assert!(report.is_success());

        let catalog = SoundCatalog::scan(dir.path());
        assert!(catalog.is_complete());
        for entry in catalog.entries() {
            let info = entry.info().unwrap();
            assert_eq!(info.channels, 1);
            assert_eq!(info.bits_per_sample, 16);
            assert_eq!(info.sample_rate, 22050);
            assert_eq!(info.frames as usize, params.num_samples());
        }
    }

    #[test]
    fn test_unknown_profile_does_no_io() {
        let dir = tempfile::tempdir().unwrap();

        let selection = "plasma".parse::<ProfileSelection>();

        assert!(matches!(selection, Err(SynthError::InvalidProfile { .. })));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
