//! Encoders from [`AudioSegment`] to file bytes.
//!
//! Both encoders are deterministic: the same segment always produces the same
//! bytes, so regenerated assets do not show up as changed files.

mod format;
mod ogg;
mod wav;

pub use format::AudioFormat;
pub use ogg::{write_ogg, write_ogg_to_vec, OGG_STREAM_SERIAL, VORBIS_QUALITY};
pub use wav::{wav_spec, write_wav, write_wav_to_vec};

use crate::error::AudioResult;
use crate::segment::AudioSegment;

/// Encodes a segment in the requested format.
pub fn encode(segment: &AudioSegment, format: AudioFormat) -> AudioResult<Vec<u8>> {
    match format {
        AudioFormat::Ogg => write_ogg_to_vec(segment),
        AudioFormat::Wav => write_wav_to_vec(segment),
    }
}
