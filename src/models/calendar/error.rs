use thiserror::Error;

/// Errors raised by calendar value construction and paging input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("page index {0} is outside the three-page window")]
    InvalidPage(usize),

    #[error("first weekday must be between 1 (Sunday) and 7 (Saturday), got {0}")]
    InvalidFirstWeekday(u8),

    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("date {0} is too close to the supported calendar range to anchor a window")]
    OutOfRange(String),
}
