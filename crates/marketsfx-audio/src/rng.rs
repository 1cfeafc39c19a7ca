//! Seeded noise streams.
//!
//! Noise is the only random source in the clips. Each clip draws from its own
//! PCG32 stream keyed by the clip name, so adding or reordering clips never
//! changes another clip's output.

use rand_pcg::Pcg32;

/// Base seed used when none is supplied.
pub const DEFAULT_SEED: u32 = 0x5EED_0001;

/// Keeps these hashes apart from the BLAKE3 PCM fingerprints.
const STREAM_DOMAIN: &[u8] = b"marketsfx.noise-stream";

/// Returns the PCG32 stream for `key` under `base_seed`.
///
/// The generator state and its stream increment are the first two
/// little-endian words of a BLAKE3 digest over the seed and key.
///
/// # Arguments
/// * `base_seed` - The run's base seed
/// * `key` - Stream identifier, e.g. `"trade_fail"`
pub fn stream_rng(base_seed: u32, key: &str) -> Pcg32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(STREAM_DOMAIN);
    hasher.update(&base_seed.to_le_bytes());
    hasher.update(key.as_bytes());
    let digest = hasher.finalize();

    let words = digest.as_bytes();
    Pcg32::new(le_word(&words[0..8]), le_word(&words[8..16]))
}

fn le_word(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |word, &b| (word << 8) | u64::from(b))
}
