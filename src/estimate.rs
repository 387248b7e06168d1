use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReadingTimeError, Result};
use crate::speed::{lenient_speed, resolve_threshold, resolve_wpm, ReadingSpeed};
use crate::words::{count_words, text_length};

const SHORT_TEXT_INFO: &str = "Less than a minute.";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    pub text: String,
    #[serde(default, deserialize_with = "lenient_speed")]
    pub speed: Option<ReadingSpeed>,
    #[serde(default)]
    pub wpm: Option<f64>,
}

impl ReadingRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_speed(mut self, speed: ReadingSpeed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Sets the preset by name; unknown names leave no preset set.
    pub fn with_speed_name(mut self, name: &str) -> Self {
        self.speed = ReadingSpeed::from_name(name);
        self
    }

    pub fn with_wpm(mut self, wpm: f64) -> Self {
        self.wpm = Some(wpm);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadingTime {
    pub read_time: u64,
    pub read_time_info: String,
    pub read_time_label: String,
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.read_time_label)
    }
}

/// Estimates how long `request.text` takes to read.
///
/// The minutes come from the word count and the resolved rate, rounded up.
/// Whether the info sentence says "Less than a minute." depends only on the
/// raw text length against the preset's threshold, so the two can disagree:
/// a short but word-dense text still gets a label of one minute or more.
pub fn calculate(request: &ReadingRequest) -> Result<ReadingTime> {
    let wpm = resolve_wpm(request.speed, request.wpm).map_err(|err| {
        tracing::warn!("Rejecting reading time request: {}", err);
        err
    })?;

    let words = count_words(&request.text);
    let minutes = (words as f64 / wpm).ceil();
    if !minutes.is_finite() || minutes >= u64::MAX as f64 {
        let err = ReadingTimeError::ReadTimeOverflow { words, wpm };
        tracing::warn!("Rejecting reading time request: {}", err);
        return Err(err);
    }
    let read_time = minutes as u64;

    let threshold = resolve_threshold(request.speed);
    let is_short_text = text_length(&request.text) < threshold;

    tracing::debug!(
        words,
        wpm,
        threshold,
        read_time,
        is_short_text,
        "Estimated reading time"
    );

    let read_time_info = if is_short_text {
        SHORT_TEXT_INFO.to_string()
    } else {
        format!(
            "Around {} minute{}.",
            read_time,
            if read_time == 1 { "" } else { "s" }
        )
    };

    Ok(ReadingTime {
        read_time,
        read_time_info,
        read_time_label: format!("{} min read", read_time),
    })
}

pub fn calculate_reading_time(
    text: &str,
    speed: Option<ReadingSpeed>,
    wpm: Option<f64>,
) -> Result<ReadingTime> {
    calculate(&ReadingRequest {
        text: text.to_string(),
        speed,
        wpm,
    })
}
