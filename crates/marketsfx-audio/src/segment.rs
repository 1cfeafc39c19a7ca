//! Immutable mono audio buffer and the operations used to build clips.
//!
//! Every operation returns a new [`AudioSegment`]; the receiver is never
//! modified. Samples are `f64` with a nominal range of `[-1.0, 1.0]`.

use crate::error::{AudioError, AudioResult};

/// Default sample rate for all generated clips.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Converts a duration in milliseconds to a sample count at `sample_rate`.
#[inline]
pub fn ms_to_samples(duration_ms: f64, sample_rate: u32) -> usize {
    (duration_ms * sample_rate as f64 / 1000.0).round() as usize
}

/// Converts decibels to a linear amplitude factor.
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

pub(crate) fn validate_sample_rate(sample_rate: u32) -> AudioResult<()> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }
    Ok(())
}

pub(crate) fn validate_duration(duration_ms: f64) -> AudioResult<()> {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return Err(AudioError::InvalidDuration { duration_ms });
    }
    Ok(())
}

/// A mono clip at a fixed sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl AudioSegment {
    /// Wraps raw samples.
    pub fn from_samples(samples: Vec<f64>, sample_rate: u32) -> AudioResult<Self> {
        validate_sample_rate(sample_rate)?;
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Creates a segment of digital silence.
    pub fn silent(duration_ms: f64, sample_rate: u32) -> AudioResult<Self> {
        validate_duration(duration_ms)?;
        validate_sample_rate(sample_rate)?;
        Ok(Self {
            samples: vec![0.0; ms_to_samples(duration_ms, sample_rate)],
            sample_rate,
        })
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 * 1000.0 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    /// Returns the `[start_ms, end_ms)` window, clamped to the segment bounds.
    pub fn slice_ms(&self, start_ms: f64, end_ms: f64) -> Self {
        let len = self.samples.len();
        let start = ms_to_samples(start_ms.max(0.0), self.sample_rate).min(len);
        let end = ms_to_samples(end_ms.max(0.0), self.sample_rate).clamp(start, len);
        Self {
            samples: self.samples[start..end].to_vec(),
            sample_rate: self.sample_rate,
        }
    }

    fn check_rate(&self, other: &Self) -> AudioResult<()> {
        if self.sample_rate != other.sample_rate {
            return Err(AudioError::SampleRateMismatch {
                left: self.sample_rate,
                right: other.sample_rate,
            });
        }
        Ok(())
    }

    /// Appends `other` after this segment.
    pub fn concat(&self, other: &Self) -> AudioResult<Self> {
        self.check_rate(other)?;
        let mut samples = Vec::with_capacity(self.len() + other.len());
        samples.extend_from_slice(&self.samples);
        samples.extend_from_slice(&other.samples);
        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Concatenates a sequence of segments in order.
    ///
    /// All parts must share a sample rate. An empty slice yields an empty
    /// segment at [`DEFAULT_SAMPLE_RATE`].
    pub fn join(parts: &[AudioSegment]) -> AudioResult<Self> {
        let Some((first, rest)) = parts.split_first() else {
            return Ok(Self {
                samples: Vec::new(),
                sample_rate: DEFAULT_SAMPLE_RATE,
            });
        };
        rest.iter().try_fold(first.clone(), |acc, part| acc.concat(part))
    }

    /// Mixes `other` onto this segment, aligned at the first sample.
    ///
    /// The result is as long as the longer input. Sums are saturated to
    /// `[-1.0, 1.0]`, matching 16-bit headroom.
    pub fn overlay(&self, other: &Self) -> AudioResult<Self> {
        self.check_rate(other)?;
        let len = self.len().max(other.len());
        let samples = (0..len)
            .map(|i| {
                let a = self.samples.get(i).copied().unwrap_or(0.0);
                let b = other.samples.get(i).copied().unwrap_or(0.0);
                (a + b).clamp(-1.0, 1.0)
            })
            .collect();
        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// Scales the segment by `db` decibels (negative values attenuate).
    pub fn apply_gain(&self, db: f64) -> Self {
        let gain = db_to_gain(db);
        Self {
            samples: self.samples.iter().map(|s| s * gain).collect(),
            sample_rate: self.sample_rate,
        }
    }

    /// Linear ramp from silence to full amplitude over the first `duration_ms`.
    pub fn fade_in(&self, duration_ms: f64) -> Self {
        let window = ms_to_samples(duration_ms.max(0.0), self.sample_rate).min(self.len());
        let samples = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if i < window {
                    s * (i as f64 / window as f64)
                } else {
                    s
                }
            })
            .collect();
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// Linear ramp from full amplitude to silence over the last `duration_ms`.
    pub fn fade_out(&self, duration_ms: f64) -> Self {
        let len = self.len();
        let window = ms_to_samples(duration_ms.max(0.0), self.sample_rate).min(len);
        let start = len - window;
        let samples = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if i >= start {
                    s * ((len - 1 - i) as f64 / window as f64)
                } else {
                    s
                }
            })
            .collect();
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// 16-bit PCM rendition, clipped to full scale.
    pub fn to_pcm16(&self) -> Vec<i16> {
        self.samples
            .iter()
            .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
            .collect()
    }

    /// Samples narrowed to `f32`, as encoders expect.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| s.clamp(-1.0, 1.0) as f32)
            .collect()
    }

    /// BLAKE3 hash of the little-endian 16-bit PCM rendition.
    pub fn pcm_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for value in self.to_pcm16() {
            hasher.update(&value.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}
