use thiserror::Error;

/// Errors raised at the scheduler's function boundary.
///
/// Every variant is a contract violation by the caller. Nothing inside the
/// scheduler performs I/O, so there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SrsError {
    #[error("invalid grade '{0}': expected one of again, good, easy")]
    InvalidGrade(String),
    #[error("invalid level {level}: the interval table tops out at level {max}")]
    InvalidLevel { level: u32, max: u32 },
    #[error("invalid interval table: {0}")]
    InvalidIntervals(String),
    #[error("invalid again delay of {0} minutes: must be between 1 and 59")]
    InvalidAgainDelay(u32),
    #[error("next review falls outside the representable date range")]
    ScheduleOverflow,
}
