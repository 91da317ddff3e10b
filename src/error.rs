//! Error types for datestrings

use thiserror::Error;

/// Result type alias for parsing and formatting operations
pub type Result<T> = std::result::Result<T, DateStringError>;

/// Errors that can occur while parsing or formatting date strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateStringError {
    /// Input was empty after trimming
    #[error("no date string provided")]
    EmptyInput,

    /// No separator trial produced a calendar-valid reading
    #[error("no valid date interpretation for {0:?}")]
    Unparseable(String),

    /// A format string contains a part that is not a known tag
    #[error("unknown format tag {tag:?} in format {format:?}")]
    UnknownTag { tag: String, format: String },

    /// A format string names the same component twice, e.g. `"Y-M1-D1-D2"`
    #[error("format {0:?} repeats a component")]
    RepeatedComponent(String),

    /// A format string has no recognizable separator
    #[error("format {0:?} has no separator")]
    MissingSeparator(String),

    /// The day formatter was given a format without a day tag
    #[error("format {0:?} has no day tag")]
    MissingDayTag(String),

    /// The month formatter was given a format with a day tag
    #[error("format {0:?} contains a day tag, which a month count cannot fill")]
    DayTagNotAllowed(String),

    /// A day count, month count or timestamp is outside the supported calendar range
    #[error("{0} is outside the supported calendar range")]
    UnrepresentableDate(String),

    /// The calendar name service has no name for the requested month
    #[error("no name available for month {month}")]
    NameUnavailable { month: u32 },

    /// One entry of a batch failed to parse
    #[error("entry {index} ({input:?}): {source}")]
    InBatch {
        index: usize,
        input: String,
        source: Box<DateStringError>,
    },
}
