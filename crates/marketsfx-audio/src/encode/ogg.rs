//! Ogg Vorbis encoding.
//!
//! The Ogg stream serial number is normally random. It is pinned here so that
//! regenerating the assets leaves the files byte-identical.

use std::io::Write;
use std::num::{NonZeroU32, NonZeroU8};

use vorbis_rs::{VorbisBitrateManagementStrategy, VorbisEncoderBuilder};

use crate::error::{AudioError, AudioResult};
use crate::segment::AudioSegment;

/// Serial number written into every Ogg page.
pub const OGG_STREAM_SERIAL: i32 = 0x534D_4658;

/// Vorbis VBR quality, roughly 112 kbit/s for mono.
pub const VORBIS_QUALITY: f32 = 0.3;

/// Samples handed to the encoder per analysis block.
const BLOCK_SIZE: usize = 4096;

/// Encodes a mono segment as Ogg Vorbis into `sink`, returning the sink.
pub fn write_ogg<W: Write>(segment: &AudioSegment, sink: W) -> AudioResult<W> {
    let sample_rate = NonZeroU32::new(segment.sample_rate()).ok_or(
        AudioError::InvalidSampleRate {
            rate: segment.sample_rate(),
        },
    )?;

    let mut builder =
        VorbisEncoderBuilder::new_with_serial(sample_rate, NonZeroU8::MIN, sink, OGG_STREAM_SERIAL);
    builder.bitrate_management_strategy(VorbisBitrateManagementStrategy::QualityVbr {
        target_quality: VORBIS_QUALITY,
    });
    let mut encoder = builder.build()?;

    let samples = segment.to_f32();
    for block in samples.chunks(BLOCK_SIZE) {
        encoder.encode_audio_block([block])?;
    }

    Ok(encoder.finish()?)
}

/// Encodes a mono segment as Ogg Vorbis bytes.
pub fn write_ogg_to_vec(segment: &AudioSegment) -> AudioResult<Vec<u8>> {
    write_ogg(segment, Vec::new())
}
