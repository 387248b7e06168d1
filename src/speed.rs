//! Reading speed presets and the two resolvers built on them.
//!
//! A preset bundles a words-per-minute rate with a character threshold under
//! which a text counts as short. The rate can be replaced by a custom wpm when
//! no preset is given; the threshold cannot.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ReadingTimeError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSpeed {
    Fast,
    Normal,
    Slow,
}

static READING_SPEEDS: Lazy<HashMap<ReadingSpeed, f64>> = Lazy::new(|| {
    HashMap::from([
        (ReadingSpeed::Fast, 240.0),
        (ReadingSpeed::Normal, 180.0),
        (ReadingSpeed::Slow, 100.0),
    ])
});

// Measured in UTF-16 code units, see `words::text_length`.
static SHORT_TEXT_THRESHOLDS: Lazy<HashMap<ReadingSpeed, usize>> = Lazy::new(|| {
    HashMap::from([
        (ReadingSpeed::Fast, 90),
        (ReadingSpeed::Normal, 70),
        (ReadingSpeed::Slow, 50),
    ])
});

impl ReadingSpeed {
    pub const ALL: [ReadingSpeed; 3] = [
        ReadingSpeed::Fast,
        ReadingSpeed::Normal,
        ReadingSpeed::Slow,
    ];

    /// Looks up a preset by its exact lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|speed| speed.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingSpeed::Fast => "fast",
            ReadingSpeed::Normal => "normal",
            ReadingSpeed::Slow => "slow",
        }
    }

    pub fn wpm(self) -> f64 {
        READING_SPEEDS[&self]
    }

    pub fn short_text_threshold(self) -> usize {
        SHORT_TEXT_THRESHOLDS[&self]
    }
}

impl fmt::Display for ReadingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingSpeed {
    type Err = ReadingTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ReadingTimeError::UnknownSpeed(s.to_string()))
    }
}

/// Deserializes an optional preset name. Anything that is not a known name,
/// including `null` and non-string values, becomes `None`.
pub(crate) fn lenient_speed<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<ReadingSpeed>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ReadingSpeed::from_name))
}

/// Picks the words-per-minute rate: preset first, then a non-zero custom wpm,
/// then the normal rate.
pub fn resolve_wpm(speed: Option<ReadingSpeed>, wpm: Option<f64>) -> Result<f64> {
    if let Some(speed) = speed {
        return Ok(speed.wpm());
    }

    match wpm {
        // Zero and NaN count as "not provided".
        Some(custom) if custom != 0.0 && !custom.is_nan() => {
            if custom.is_finite() && custom > 0.0 {
                Ok(custom)
            } else {
                Err(ReadingTimeError::InvalidWpm(custom))
            }
        }
        _ => Ok(ReadingSpeed::Normal.wpm()),
    }
}

/// Picks the short-text threshold. A custom wpm never changes it.
pub fn resolve_threshold(speed: Option<ReadingSpeed>) -> usize {
    speed.unwrap_or(ReadingSpeed::Normal).short_text_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_tables() {
        assert_eq!(ReadingSpeed::Fast.wpm(), 240.0);
        assert_eq!(ReadingSpeed::Normal.wpm(), 180.0);
        assert_eq!(ReadingSpeed::Slow.wpm(), 100.0);

        assert_eq!(ReadingSpeed::Fast.short_text_threshold(), 90);
        assert_eq!(ReadingSpeed::Normal.short_text_threshold(), 70);
        assert_eq!(ReadingSpeed::Slow.short_text_threshold(), 50);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ReadingSpeed::from_name("fast"), Some(ReadingSpeed::Fast));
        assert_eq!(ReadingSpeed::from_name("slow"), Some(ReadingSpeed::Slow));
        assert_eq!(ReadingSpeed::from_name("Fast"), None);
        assert_eq!(ReadingSpeed::from_name("turbo"), None);
        assert_eq!(ReadingSpeed::from_name(""), None);
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("normal".parse::<ReadingSpeed>(), Ok(ReadingSpeed::Normal));
        assert_eq!(
            "turbo".parse::<ReadingSpeed>(),
            Err(ReadingTimeError::UnknownSpeed("turbo".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_name() {
        for speed in ReadingSpeed::ALL {
            assert_eq!(ReadingSpeed::from_name(&speed.to_string()), Some(speed));
        }
    }

    #[test]
    fn test_resolve_wpm_precedence() {
        assert_eq!(resolve_wpm(Some(ReadingSpeed::Slow), Some(240.0)), Ok(100.0));
        assert_eq!(resolve_wpm(None, Some(60.0)), Ok(60.0));
        assert_eq!(resolve_wpm(None, None), Ok(180.0));
    }

    #[test]
    fn test_resolve_wpm_falsy_custom_rate() {
        assert_eq!(resolve_wpm(None, Some(0.0)), Ok(180.0));
        assert_eq!(resolve_wpm(None, Some(f64::NAN)), Ok(180.0));
    }

    #[test]
    fn test_resolve_wpm_rejects_unusable_custom_rate() {
        assert_eq!(resolve_wpm(None, Some(-10.0)), Err(ReadingTimeError::InvalidWpm(-10.0)));
        assert_eq!(
            resolve_wpm(None, Some(f64::INFINITY)),
            Err(ReadingTimeError::InvalidWpm(f64::INFINITY))
        );
        // Shadowed by a preset, so never used.
        assert_eq!(resolve_wpm(Some(ReadingSpeed::Fast), Some(-10.0)), Ok(240.0));
    }

    #[test]
    fn test_resolve_threshold_ignores_wpm() {
        assert_eq!(resolve_threshold(None), 70);
        assert_eq!(resolve_threshold(Some(ReadingSpeed::Fast)), 90);
        assert_eq!(resolve_threshold(Some(ReadingSpeed::Slow)), 50);
    }
}
