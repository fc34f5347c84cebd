//! Keyclick CLI - renders procedural keyboard click sounds to WAV files
//!
//! This binary generates the `keyboard_<profile>.wav` asset catalog and
//! inspects existing assets.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use keyclick_cli::commands;
use keyclick_cli::config::GeneratorConfig;
use keyclick_cli::logging;

/// Keyclick - Procedural Mechanical Keyboard Sounds
#[derive(Parser)]
#[command(name = "keyclick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log engine diagnostics at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one profile, or all of them, to WAV files
    Generate {
        /// Profile name, or "all" [default: all]
        #[arg(short = 't', long = "type")]
        profile: Option<String>,

        /// Click length in seconds [default: 0.15]
        #[arg(short, long)]
        duration: Option<f64>,

        /// Base frequency in Hz [default: 800]
        #[arg(short, long)]
        frequency: Option<f64>,

        /// Sample rate in Hz [default: 44100]
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Output directory [default: generated_sounds]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible renders (unseeded renders vary slightly)
        #[arg(long)]
        seed: Option<u32>,

        /// JSON config file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which profile assets exist in a directory
    List {
        /// Asset directory
        #[arg(long, default_value = "generated_sounds")]
        dir: PathBuf,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the header of a WAV asset
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            profile,
            duration,
            frequency,
            sample_rate,
            output,
            seed,
            config,
            json,
        } => {
            let flags = GeneratorConfig {
                profile,
                duration,
                frequency,
                sample_rate,
                output,
                seed,
            };
            commands::generate::run(flags, config.as_deref(), json)
        }
        Commands::List { dir, json } => commands::list::run(&dir, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
