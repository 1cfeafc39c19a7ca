//! Error types for sound effect synthesis and export.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while synthesizing or exporting a clip.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration_ms} ms")]
    InvalidDuration {
        /// The invalid duration.
        duration_ms: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Two segments with different sample rates were combined.
    #[error("sample rate mismatch: {left} Hz vs {right} Hz")]
    SampleRateMismatch {
        /// Sample rate of the left-hand segment.
        left: u32,
        /// Sample rate of the right-hand segment.
        right: u32,
    },

    /// Filesystem operation failed on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Ogg Vorbis encoder failure.
    #[error("vorbis encoding failed: {0}")]
    Vorbis(#[from] vorbis_rs::VorbisError),

    /// WAV encoder failure.
    #[error("wav encoding failed: {0}")]
    Wav(#[from] hound::Error),
}

impl AudioError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
