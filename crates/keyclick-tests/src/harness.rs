//! Test harness utilities for running the CLI and validating outputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Result of running the keyclick CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
    }
}

/// A scratch directory plus helpers for running keyclick commands in it.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Path inside the working directory.
    pub fn join(&self, rel: &str) -> PathBuf {
        self.path().join(rel)
    }

    /// Run the keyclick CLI with the given arguments, from the working directory.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let manifest_path = keyclick_manifest_path();

        let output = Command::new("cargo")
            .args(["run", "--quiet", "--manifest-path"])
            .arg(&manifest_path)
            .args(["-p", "keyclick-cli", "--bin", "keyclick", "--"])
            .args(args)
            .current_dir(self.path())
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Generate assets into `rel_dir` with the CLI.
    pub fn generate(&self, profile: &str, rel_dir: &str, extra: &[&str]) -> CliResult {
        let out = self.join(rel_dir);
        let mut args = vec![
            "generate",
            "--type",
            profile,
            "--output",
            out.to_str().expect("temp path is UTF-8"),
        ];
        args.extend_from_slice(extra);
        self.run_cli(&args)
    }
}

fn keyclick_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Header and payload summary of a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavFileInfo {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
    pub frames: u32,
    pub file_size: u64,
    /// Largest absolute sample value.
    pub peak: i16,
}

/// Validate a WAV file is well formed and return its layout.
pub fn validate_wav_file(path: &Path) -> Result<WavFileInfo, String> {
    let file_size = fs::metadata(path)
        .map_err(|e| format!("Failed to stat {}: {}", path.display(), e))?
        .len();
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(format!("{} is not integer PCM", path.display()));
    }
    let frames = reader.duration();

    let mut peak: i16 = 0;
    for sample in reader.samples::<i16>() {
        let sample = sample.map_err(|e| format!("Bad sample in {}: {}", path.display(), e))?;
        peak = peak.max(sample.saturating_abs());
    }

    Ok(WavFileInfo {
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        sample_rate: spec.sample_rate,
        frames,
        file_size,
        peak,
    })
}

/// Sorted file names of the `.wav` files directly inside `dir`.
pub fn wav_files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .filter(|name| name.ends_with(".wav"))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
