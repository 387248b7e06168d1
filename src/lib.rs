//! Estimated reading time for a block of text, for "N min read" labels.
//!
//! ```
//! use readtime::{calculate, ReadingRequest, ReadingSpeed};
//!
//! let text = "This is a longer text. ".repeat(50);
//! let result = calculate(&ReadingRequest::new(text).with_speed(ReadingSpeed::Fast)).unwrap();
//! assert_eq!(result.read_time, 2);
//! assert_eq!(result.read_time_info, "Around 2 minutes.");
//! assert_eq!(result.read_time_label, "2 min read");
//! ```

pub mod error;
pub mod estimate;
pub mod speed;
pub mod words;

pub use error::{ReadingTimeError, Result};
pub use estimate::{calculate, calculate_reading_time, ReadingRequest, ReadingTime};
pub use speed::{resolve_threshold, resolve_wpm, ReadingSpeed};
pub use words::{count_words, text_length};
