//! Generate command implementation
//!
//! Synthesizes every sound effect and writes it into the mod's sound
//! directory, then reports what was written.

use anyhow::{Context, Result};
use colored::Colorize;
use marketsfx_audio::{export_all, AudioFormat, ExportOptions, ExportedFile, DEFAULT_SAMPLE_RATE};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// Line printed once every file has been written.
pub const SUCCESS_MESSAGE: &str = "Sound files generated successfully!";

/// JSON report printed with `--json`.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Whether every file was written.
    pub success: bool,
    /// Output directory as given.
    pub out_dir: String,
    /// Files written, in export order. Empty on failure.
    pub files: Vec<ExportedFile>,
    /// Error chain when the run failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateReport {
    /// Creates a report for a completed run.
    pub fn success(out_dir: &str, files: Vec<ExportedFile>) -> Self {
        Self {
            success: true,
            out_dir: out_dir.to_string(),
            files,
            error: None,
        }
    }

    /// Creates a report for a failed run.
    pub fn failure(out_dir: &str, error: &anyhow::Error) -> Self {
        Self {
            success: false,
            out_dir: out_dir.to_string(),
            files: Vec::new(),
            error: Some(format!("{:#}", error)),
        }
    }
}

/// Generates all sound effects into a directory.
///
/// The first failure aborts the run. With `json`, failures are reported as a
/// JSON report on stdout instead of an error.
///
/// # Arguments
/// * `out_dir` - Output directory (created if missing)
/// * `format` - Encoding for every file
/// * `seed` - Base seed for noise
/// * `json` - Print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 if generation failed
pub fn run(out_dir: &str, format: AudioFormat, seed: u32, json: bool) -> Result<ExitCode> {
    if !json {
        generate(out_dir, format, seed, true)?;
        println!("{}", SUCCESS_MESSAGE.green().bold());
        return Ok(ExitCode::SUCCESS);
    }

    let (report, code) = match generate(out_dir, format, seed, false) {
        Ok(files) => (GenerateReport::success(out_dir, files), ExitCode::SUCCESS),
        Err(e) => (GenerateReport::failure(out_dir, &e), ExitCode::from(1)),
    };
    let text =
        serde_json::to_string_pretty(&report).context("Failed to serialize report to JSON")?;
    println!("{}", text);

    Ok(code)
}

/// Writes every effect into `out_dir` and returns the per-file reports.
pub fn generate(
    out_dir: &str,
    format: AudioFormat,
    seed: u32,
    verbose: bool,
) -> Result<Vec<ExportedFile>> {
    let options = ExportOptions {
        format,
        sample_rate: DEFAULT_SAMPLE_RATE,
        seed,
    };

    if verbose {
        println!("{} {}", "Output directory:".blue().bold(), out_dir);
        println!("{} {}", "Format:".blue().bold(), format);
        println!();
    }

    let files = export_all(Path::new(out_dir), &options)
        .with_context(|| format!("Failed to generate sound files into {}", out_dir))?;

    if verbose {
        for file in &files {
            print_written(file);
        }
        println!();
    }

    Ok(files)
}

fn print_written(file: &ExportedFile) {
    println!(
        "  {} {} ({:.0} ms, {} bytes)",
        "WROTE".green(),
        file.path.display(),
        file.duration_ms,
        file.bytes
    );
    println!("        {} {}", "pcm".dimmed(), &file.pcm_hash[..16]);
}
