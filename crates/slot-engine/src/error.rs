//! Error types for scheduling operations.

use thiserror::Error;

/// Errors surfaced by availability resolution and slot generation.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A stored time value was not a valid `"HH:MM"` wall-clock string.
    #[error("Malformed time value: {0}")]
    MalformedTime(String),

    /// The requested service duration is not bookable (zero minutes).
    #[error("Invalid service duration: {0} minutes")]
    InvalidDuration(u16),

    /// The persistence collaborator failed to supply schedule data.
    /// Never translated into "fully open" or "fully booked".
    #[error("Schedule store error: {0}")]
    Store(String),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
