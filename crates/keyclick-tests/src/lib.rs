//! Keyclick End-to-End Test Infrastructure
//!
//! Integration tests for the flows the desktop daemon and control panel
//! rely on:
//!
//! - Generation: profile selection -> `keyboard_<name>.wav` files
//! - Validation: files are readable mono 16-bit WAV of the right length
//! - CLI: exit codes and output directory handling
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p keyclick-tests
//! ```

pub mod harness;

pub use harness::{validate_wav_file, wav_files_in, CliResult, TestHarness, WavFileInfo};
