//! 16-bit PCM WAV encoding.

use std::io::{Cursor, Seek, Write};

use crate::error::AudioResult;
use crate::segment::AudioSegment;

/// WAV header parameters for a mono 16-bit segment.
pub fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes a mono segment as a WAV file to a seekable writer.
pub fn write_wav<W: Write + Seek>(segment: &AudioSegment, sink: W) -> AudioResult<()> {
    let mut writer = hound::WavWriter::new(sink, wav_spec(segment.sample_rate()))?;
    for sample in segment.to_pcm16() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Writes a mono segment to WAV bytes.
pub fn write_wav_to_vec(segment: &AudioSegment) -> AudioResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(44 + segment.len() * 2));
    write_wav(segment, &mut cursor)?;
    Ok(cursor.into_inner())
}
