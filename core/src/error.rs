use thiserror::Error;

/// Failures raised while turning calendar text into day records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid start date '{input}', expected YYYY-MM-DD")]
    InvalidStartDate { input: String },

    #[error("block {block}: day token '{token}' is not a number")]
    InvalidDayToken { block: usize, token: String },

    #[error("block {block}: day {day} moves the calendar out of range")]
    DateOutOfRange { block: usize, day: u32 },
}

/// Failures of a whole analysis run. Display output is the single message
/// shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no calendar text provided: load a file or paste the calendar first")]
    EmptyInput,

    #[error("failed to parse calendar: {0}")]
    Parse(#[from] ParseError),
}
