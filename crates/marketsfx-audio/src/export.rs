//! Writing clips to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::encode::{encode, AudioFormat};
use crate::error::{AudioError, AudioResult};
use crate::rng::DEFAULT_SEED;
use crate::segment::{AudioSegment, DEFAULT_SAMPLE_RATE};
use crate::sfx::SoundEffect;

/// Mod sound directory, relative to the generator's working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "../src/main/resources/assets/stockmarketmod/sounds";

/// Settings for a full export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Encoding for every file.
    pub format: AudioFormat,
    /// Sample rate for every clip.
    pub sample_rate: u32,
    /// Base seed for noise.
    pub seed: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: AudioFormat::Ogg,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

/// Report for one written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedFile {
    /// Which effect was written.
    pub effect: SoundEffect,
    /// Destination path.
    pub path: PathBuf,
    /// Encoding used.
    pub format: AudioFormat,
    /// Encoded file size in bytes.
    pub bytes: usize,
    /// Number of samples in the clip.
    pub num_samples: usize,
    /// Clip duration in milliseconds.
    pub duration_ms: f64,
    /// BLAKE3 hash of the 16-bit PCM content.
    pub pcm_hash: String,
}

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_dir(dir: &Path) -> AudioResult<()> {
    fs::create_dir_all(dir).map_err(|e| AudioError::io(dir, e))
}

/// Path of an effect's file inside `out_dir`.
pub fn output_path(out_dir: &Path, effect: SoundEffect, format: AudioFormat) -> PathBuf {
    out_dir.join(format!("{}.{}", effect.file_stem(), format.extension()))
}

/// Encodes `segment` and writes it to `path`, replacing any existing file.
///
/// # Returns
/// Number of bytes written
pub fn export_segment(
    segment: &AudioSegment,
    path: &Path,
    format: AudioFormat,
) -> AudioResult<usize> {
    let data = encode(segment, format)?;
    fs::write(path, &data).map_err(|e| AudioError::io(path, e))?;
    Ok(data.len())
}

/// Synthesizes and writes one effect into `out_dir`.
///
/// The directory must already exist.
pub fn export_effect(
    effect: SoundEffect,
    out_dir: &Path,
    options: &ExportOptions,
) -> AudioResult<ExportedFile> {
    let clip = effect.synthesize(options.sample_rate, options.seed)?;
    let path = output_path(out_dir, effect, options.format);
    let bytes = export_segment(&clip, &path, options.format)?;

    Ok(ExportedFile {
        effect,
        path,
        format: options.format,
        bytes,
        num_samples: clip.len(),
        duration_ms: clip.duration_ms(),
        pcm_hash: clip.pcm_hash(),
    })
}

/// Creates `out_dir` and writes every [`SoundEffect`] into it, in order.
///
/// Stops at the first failure; files already written are left in place.
pub fn export_all(out_dir: &Path, options: &ExportOptions) -> AudioResult<Vec<ExportedFile>> {
    ensure_output_dir(out_dir)?;
    SoundEffect::ALL
        .iter()
        .map(|&effect| export_effect(effect, out_dir, options))
        .collect()
}
