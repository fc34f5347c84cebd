//! Inspect command implementation
//!
//! Prints the header of a rendered WAV asset.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use keyclick_synth::read_asset_info;

/// Run the inspect command
///
/// # Arguments
/// * `input` - WAV file to inspect
/// * `json` - Print the header info as JSON
///
/// # Returns
/// Exit code: 0 for a mono 16-bit file, 1 for any other layout
pub fn run(input: &Path, json: bool) -> Result<ExitCode> {
    let info = read_asset_info(input)
        .with_context(|| format!("Failed to inspect {}", input.display()))?;

    if json {
        let text = serde_json::to_string_pretty(&info).context("Failed to serialize asset info")?;
        println!("{}", text);
    } else {
        println!("{} {}", "File:".blue().bold(), input.display());
        println!("{} {}", "Channels:".blue().bold(), info.channels);
        println!("{} {}", "Bit depth:".blue().bold(), info.bits_per_sample);
        println!("{} {} Hz", "Sample rate:".blue().bold(), info.sample_rate);
        println!("{} {}", "Frames:".blue().bold(), info.frames);
        println!("{} {:.3}s", "Duration:".blue().bold(), info.duration_seconds);
        if !info.is_mono_pcm16() {
            println!(
                "{} not a mono 16-bit asset",
                "WARNING".yellow().bold()
            );
        }
    }

    if info.is_mono_pcm16() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
