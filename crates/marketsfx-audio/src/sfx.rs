//! The three stock market sound effects.
//!
//! Each recipe is a fixed chain of generators and segment operations. Gain is
//! always applied after the waveforms have been combined.

use std::fmt;

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::error::AudioResult;
use crate::oscillator::{SineSynth, SquareSynth, Synthesizer, WhiteNoiseSynth};
use crate::rng::stream_rng;
use crate::segment::AudioSegment;

/// A named sound effect shipped with the mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Rising two-tone chime played when an order fills.
    TradeSuccess,
    /// Noisy buzz played when an order is rejected.
    TradeFail,
    /// Short tick with echo played on each market price update.
    MarketUpdate,
}

impl SoundEffect {
    /// All effects in export order.
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::TradeSuccess,
        SoundEffect::TradeFail,
        SoundEffect::MarketUpdate,
    ];

    /// File name without extension; also the mod's sound event id.
    pub fn file_stem(&self) -> &'static str {
        match self {
            SoundEffect::TradeSuccess => "trade_success",
            SoundEffect::TradeFail => "trade_fail",
            SoundEffect::MarketUpdate => "market_update",
        }
    }

    /// Synthesizes this effect.
    ///
    /// # Arguments
    /// * `sample_rate` - Output sample rate in Hz
    /// * `seed` - Base seed for any noise in the recipe
    pub fn synthesize(&self, sample_rate: u32, seed: u32) -> AudioResult<AudioSegment> {
        let mut rng = stream_rng(seed, self.file_stem());
        match self {
            SoundEffect::TradeSuccess => trade_success(sample_rate, &mut rng),
            SoundEffect::TradeFail => trade_fail(sample_rate, &mut rng),
            SoundEffect::MarketUpdate => market_update(sample_rate, &mut rng),
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// 800 Hz then 1200 Hz sine, 100 ms each, separated by 50 ms of silence.
pub fn trade_success(sample_rate: u32, rng: &mut Pcg32) -> AudioResult<AudioSegment> {
    let low = SineSynth::new(800.0)?.to_segment(100.0, sample_rate, rng)?;
    let high = SineSynth::new(1200.0)?.to_segment(100.0, sample_rate, rng)?;
    let gap = AudioSegment::silent(50.0, sample_rate)?;

    let chime = AudioSegment::join(&[low, gap, high])?;
    Ok(chime.fade_in(10.0).fade_out(50.0))
}

/// 200 ms of white noise with a 200 Hz square buzz mixed on top, 10 dB down.
pub fn trade_fail(sample_rate: u32, rng: &mut Pcg32) -> AudioResult<AudioSegment> {
    let noise = WhiteNoiseSynth.to_segment(200.0, sample_rate, rng)?;
    let buzz = SquareSynth::new(200.0)?.to_segment(200.0, sample_rate, rng)?;

    let sound = noise.overlay(&buzz)?.apply_gain(-10.0);
    Ok(sound.fade_in(10.0).fade_out(100.0))
}

/// 50 ms 2 kHz tick, 30 ms gap, then the same tick 6 dB quieter.
pub fn market_update(sample_rate: u32, rng: &mut Pcg32) -> AudioResult<AudioSegment> {
    let tick = SineSynth::new(2000.0)?.to_segment(50.0, sample_rate, rng)?;
    let echo = tick.apply_gain(-6.0);
    let gap = AudioSegment::silent(30.0, sample_rate)?;

    let sound = AudioSegment::join(&[tick, gap, echo])?;
    Ok(sound.fade_in(5.0).fade_out(20.0))
}
