//! Primitive waveform generators.
//!
//! Tones are rendered at full scale starting at phase zero. Noise draws from
//! the caller's RNG so clips stay reproducible.

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{AudioError, AudioResult};
use crate::segment::{ms_to_samples, validate_duration, validate_sample_rate, AudioSegment};

/// Common trait for the waveform generators.
pub trait Synthesizer {
    /// Generates `num_samples` samples in range [-1.0, 1.0].
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;

    /// Renders `duration_ms` of output as an [`AudioSegment`].
    fn to_segment(
        &self,
        duration_ms: f64,
        sample_rate: u32,
        rng: &mut Pcg32,
    ) -> AudioResult<AudioSegment> {
        validate_duration(duration_ms)?;
        validate_sample_rate(sample_rate)?;
        let num_samples = ms_to_samples(duration_ms, sample_rate);
        AudioSegment::from_samples(
            self.synthesize(num_samples, sample_rate as f64, rng),
            sample_rate,
        )
    }
}

fn validate_frequency(freq: f64) -> AudioResult<f64> {
    if !freq.is_finite() || freq <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq });
    }
    Ok(freq)
}

/// Sine wave generator.
#[derive(Debug, Clone, Copy)]
pub struct SineSynth {
    /// Frequency in Hz.
    pub frequency: f64,
}

impl SineSynth {
    /// Creates a sine generator; the frequency must be positive.
    pub fn new(frequency: f64) -> AudioResult<Self> {
        Ok(Self {
            frequency: validate_frequency(frequency)?,
        })
    }
}

impl Synthesizer for SineSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let step = TAU * self.frequency / sample_rate;
        (0..num_samples).map(|i| (step * i as f64).sin()).collect()
    }
}

/// Square wave generator.
#[derive(Debug, Clone, Copy)]
pub struct SquareSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Fraction of each cycle spent high (0.5 = symmetric square).
    pub duty: f64,
}

impl SquareSynth {
    /// Creates a symmetric square generator; the frequency must be positive.
    pub fn new(frequency: f64) -> AudioResult<Self> {
        Ok(Self {
            frequency: validate_frequency(frequency)?,
            duty: 0.5,
        })
    }
}

impl Synthesizer for SquareSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let cycles_per_sample = self.frequency / sample_rate;
        (0..num_samples)
            .map(|i| {
                let position = (i as f64 * cycles_per_sample).fract();
                if position < self.duty {
                    1.0
                } else {
                    -1.0
                }
            })
            .collect()
    }
}

/// Uniform white noise generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteNoiseSynth;

impl Synthesizer for WhiteNoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        (0..num_samples).map(|_| rng.gen_range(-1.0..1.0)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::stream_rng;
    use crate::segment::DEFAULT_SAMPLE_RATE;

    #[test]
    fn test_sine_starts_at_zero_and_is_bounded() {
        let mut rng = stream_rng(1, "oscillator");
        let seg = SineSynth::new(800.0)
            .unwrap()
            .to_segment(100.0, DEFAULT_SAMPLE_RATE, &mut rng)
            .unwrap();

        assert_eq!(seg.len(), 4410);
        assert_eq!(seg.samples()[0], 0.0);
        assert!(seg.peak() <= 1.0);
        assert!(seg.peak() > 0.99);
    }

    #[test]
    fn test_sine_quarter_period() {
        // 11025 Hz at 44.1 kHz peaks on the second sample
        let mut rng = stream_rng(1, "oscillator");
        let samples = SineSynth::new(11025.0)
            .unwrap()
            .synthesize(4, 44100.0, &mut rng);
        assert!((samples[1] - 1.0).abs() < 1e-12);
        assert!((samples[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_alternates_half_cycles() {
        // 200 Hz at 44.1 kHz: 220.5 samples per cycle
        let mut rng = stream_rng(1, "oscillator");
        let samples = SquareSynth::new(200.0)
            .unwrap()
            .synthesize(441, 44100.0, &mut rng);

        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[110], 1.0);
        assert_eq!(samples[111], -1.0);
        assert_eq!(samples[220], -1.0);
        assert_eq!(samples[221], 1.0);
        assert!(samples.iter().all(|&s| s == 1.0 || s == -1.0));
    }

    #[test]
    fn test_noise_range_and_determinism() {
        let mut rng1 = stream_rng(42, "oscillator");
        let mut rng2 = stream_rng(42, "oscillator");
        let a = WhiteNoiseSynth.synthesize(2000, 44100.0, &mut rng1);
        let b = WhiteNoiseSynth.synthesize(2000, 44100.0, &mut rng2);

        assert_eq!(a, b);
        assert!(a.iter().all(|s| (-1.0..1.0).contains(s)));
        // Not silent
        assert!(a.iter().any(|s| s.abs() > 0.5));
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        assert!(matches!(
            SineSynth::new(0.0),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(SquareSynth::new(-200.0).is_err());
        assert!(SineSynth::new(f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_duration_rejected() {
        let mut rng = stream_rng(1, "oscillator");
        let result = SineSynth::new(440.0)
            .unwrap()
            .to_segment(0.0, DEFAULT_SAMPLE_RATE, &mut rng);
        assert!(matches!(result, Err(AudioError::InvalidDuration { .. })));
    }
}
