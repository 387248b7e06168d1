use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingTimeError {
    #[error("Invalid words per minute: {0} (must be finite and greater than zero)")]
    InvalidWpm(f64),

    #[error("Reading time out of range: {words} words at {wpm} words per minute")]
    ReadTimeOverflow { words: usize, wpm: f64 },

    #[error("Unknown reading speed: {0}")]
    UnknownSpeed(String),
}

pub type Result<T> = std::result::Result<T, ReadingTimeError>;
