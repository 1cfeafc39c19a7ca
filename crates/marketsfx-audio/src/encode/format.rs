//! Output encodings.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Encoded audio container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// OGG Vorbis audio format.
    #[default]
    Ogg,
    /// 16-bit PCM WAV audio format.
    Wav,
}

impl AudioFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Ogg => "ogg",
            AudioFormat::Wav => "wav",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ogg" => Ok(AudioFormat::Ogg),
            "wav" => Ok(AudioFormat::Wav),
            other => Err(format!("unknown audio format '{other}' (expected ogg or wav)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_round_trips_through_from_str() {
        for format in [AudioFormat::Ogg, AudioFormat::Wav] {
            assert_eq!(format.extension().parse::<AudioFormat>(), Ok(format));
        }
        assert_eq!("OGG".parse::<AudioFormat>(), Ok(AudioFormat::Ogg));
    }

    #[test]
    fn test_unknown_format() {
        let err = "mp3".parse::<AudioFormat>().unwrap_err();
        assert!(err.contains("mp3"));
    }

    #[test]
    fn test_default_is_ogg() {
        assert_eq!(AudioFormat::default(), AudioFormat::Ogg);
    }
}
