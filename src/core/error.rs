//! Error types for reservation operations.

use thiserror::Error;

use crate::util::ids::BookingId;

/// Errors produced by the reservation engine.
///
/// Every variant is a rejected operation that leaves prior state intact;
/// nothing here is fatal, and conflicts are caller-correctable rather than
/// transient, so no retry machinery exists.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Candidate interval overlaps the identified existing booking.
    #[error("slot conflicts with existing booking {0}")]
    Conflict(BookingId),
    /// Request rejected before any conflict check was run.
    #[error("invalid booking request: {0}")]
    Validation(String),
    /// Actor is neither the owner of the booking nor an administrator.
    #[error("not permitted: {0}")]
    Authorization(String),
    /// Candidate start lies before the current wall-clock time.
    #[error("slot is in the past")]
    SlotInPast,
    /// Store-backend failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
