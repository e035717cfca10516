//! Error types for recurrence planning and schedule updates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// Monthly-by-day-of-week requires the weekday and the occurrence as a pair.
    #[error(
        "monthly schedules by day of week require both a day of week and an occurrence, or neither"
    )]
    MonthlyOccurrencePairing,

    /// An explicit occurrence of zero is rejected rather than treated as unset.
    #[error("day of week occurrence must be 1 through 5, or -1 for the last occurrence")]
    ZeroOccurrence,

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),
}

/// Errors surfaced by [`crate::update::update_schedule`]: either a local
/// validation failure (raised before any remote call), or a remote failure
/// passed through unchanged.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("schedule service error: {0}")]
    Service(String),
}

/// Convenience alias used throughout cadence-core.
pub type Result<T> = std::result::Result<T, PlanError>;
