//! Stock market mod sound effects
//!
//! This crate synthesizes the mod's three sound effects and writes them as
//! encoded audio files:
//!
//! - `trade_success` - rising two-tone chime
//! - `trade_fail` - noisy square-wave buzz
//! - `market_update` - short tick with a quieter echo
//!
//! # Determinism
//!
//! Output is byte-identical across runs with the same seed. Noise comes from
//! PCG32 seeded through BLAKE3, and the Ogg stream serial is fixed.
//!
//! # Example
//!
//! ```ignore
//! use marketsfx_audio::{export_all, ExportOptions};
//! use std::path::Path;
//!
//! let files = export_all(Path::new("sounds"), &ExportOptions::default())?;
//! for file in &files {
//!     println!("{} -> {}", file.effect, file.path.display());
//! }
//! ```
//!
//! # Crate Structure
//!
//! - [`segment`] - Immutable audio buffer with mixing, gain and fades
//! - [`oscillator`] - Sine, square and white noise generators
//! - [`sfx`] - The three effect recipes
//! - [`encode`] - Ogg Vorbis and WAV encoders
//! - [`export`] - Directory creation and file output
//! - [`rng`] - Seeded PCG32 noise streams

pub mod encode;
pub mod error;
pub mod export;
pub mod oscillator;
pub mod rng;
pub mod segment;
pub mod sfx;

// Re-export main types at crate root
pub use encode::AudioFormat;
pub use error::{AudioError, AudioResult};
pub use export::{
    ensure_output_dir, export_all, export_effect, export_segment, ExportOptions, ExportedFile,
    DEFAULT_OUTPUT_DIR,
};
pub use segment::{AudioSegment, DEFAULT_SAMPLE_RATE};
pub use sfx::SoundEffect;
