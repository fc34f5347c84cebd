//! Generate command implementation
//!
//! Renders one profile or the whole catalog into an output directory.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use keyclick_synth::{generate_catalog, BatchReport};

use crate::config::{GenerationPlan, GeneratorConfig};

/// Run the generate command
///
/// # Arguments
/// * `flags` - Settings given on the command line
/// * `config_path` - Optional JSON config file; flags override its values
/// * `json` - Print the batch report as JSON instead of colored progress
///
/// # Returns
/// Exit code: 0 success, 1 if any profile failed
pub fn run(flags: GeneratorConfig, config_path: Option<&Path>, json: bool) -> Result<ExitCode> {
    let start = Instant::now();

    let file_config = match config_path {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let plan = flags.or(file_config).resolve()?;

    if !json {
        print_header(&plan);
    }

    fs::create_dir_all(&plan.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            plan.output_dir.display()
        )
    })?;

    let report = generate_catalog(plan.selection, &plan.params, &plan.output_dir)?;

    if json {
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize batch report")?;
        println!("{}", text);
    } else {
        print_report(&report, start.elapsed().as_secs_f64());
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_header(plan: &GenerationPlan) {
    println!("{}", "======================================".cyan());
    println!("{}", "  Keyboard Sound Generator".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Profiles:".blue().bold(), plan.selection);
    println!(
        "{} {}s @ {} Hz",
        "Duration:".blue().bold(),
        plan.params.duration_seconds,
        plan.params.sample_rate
    );
    println!(
        "{} {} Hz",
        "Base frequency:".blue().bold(),
        plan.params.base_frequency
    );
    if let Some(seed) = plan.params.seed {
        println!("{} {}", "Seed:".blue().bold(), seed);
    }
    println!(
        "{} {}",
        "Output directory:".blue().bold(),
        plan.output_dir.display()
    );
    println!();
}

fn print_report(report: &BatchReport, elapsed: f64) {
    for outcome in &report.outcomes {
        if outcome.success {
            println!(
                "  {} {:<12} {} {}",
                "SUCCESS".green(),
                outcome.profile.name(),
                outcome.path.display(),
                format!("({}ms)", outcome.duration_ms).dimmed()
            );
        } else {
            println!(
                "  {} {:<12} {}",
                "FAILED".red(),
                outcome.profile.name(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!();
    println!("{}", "======================================".cyan());
    println!("{}", "  Generation Summary".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Total profiles:".blue().bold(), report.total);
    println!("{} {}", "Successful:".green().bold(), report.succeeded);
    println!("{} {}", "Failed:".red().bold(), report.failed);
    println!("{} {:.2}s", "Total runtime:".blue().bold(), elapsed);
    println!();
    println!(
        "{} {}",
        "Outputs saved to:".blue().bold(),
        report.output_dir.display()
    );
}
