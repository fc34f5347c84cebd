//! List command implementation
//!
//! Shows every profile and whether its asset exists in a directory.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use keyclick_synth::catalog::AssetStatus;
use keyclick_synth::SoundCatalog;

/// Run the list command
///
/// # Arguments
/// * `dir` - Asset directory to check
/// * `json` - Print the catalog as JSON
///
/// # Returns
/// Exit code: always 0; missing assets are reported, not treated as errors
pub fn run(dir: &Path, json: bool) -> Result<ExitCode> {
    let catalog = SoundCatalog::scan(dir);

    if json {
        let text = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Asset directory:".blue().bold(), dir.display());
    println!();

    for entry in catalog.entries() {
        let status = match &entry.status {
            AssetStatus::Present { info } => format!(
                "{} {} Hz, {} frames ({:.3}s)",
                "present".green(),
                info.sample_rate,
                info.frames,
                info.duration_seconds
            ),
            AssetStatus::Missing => "missing".yellow().to_string(),
            AssetStatus::Unreadable { error } => format!("{} {}", "unreadable".red(), error),
        };
        println!(
            "  {:<12} {:<22} {}",
            entry.profile.name(),
            entry.profile.display_name(),
            status
        );
    }

    let missing = catalog.missing();
    println!();
    if missing.is_empty() {
        println!("{} all {} profiles present", "OK".green().bold(), catalog.entries().len());
    } else {
        println!(
            "{} {} profile(s) need generating: {}",
            "INFO".yellow().bold(),
            missing.len(),
            missing
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run(dir.path(), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(dir.path(), true).unwrap(), ExitCode::SUCCESS);
    }
}
