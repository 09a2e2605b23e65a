//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    /// A time range was built with `start > end` or a bound outside `[0, 1440]`.
    #[error("Invalid time range [{start}, {end}): need start <= end <= 1440")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
