//! Conflict detection and mutation-rights checks for hour-aligned slots.

use chrono::{Duration, NaiveDateTime};

use crate::core::booking::{Actor, Booking, BookingRequest, SlotState};
use crate::core::error::ScheduleError;

/// Inclusive bounds on the duration of a single booking, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationLimits {
    /// Smallest accepted duration.
    pub min_hours: u32,
    /// Largest accepted duration.
    pub max_hours: u32,
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min_hours: 1,
            max_hours: 10,
        }
    }
}

/// Stateless scheduling core.
///
/// Operates on a booking snapshot supplied by the caller; it never touches
/// storage itself. Conflict scope is global: the sector on a booking is a
/// descriptive tag, and two sectors cannot hold the same hour because there
/// is one physical room.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotScheduler {
    limits: DurationLimits,
}

impl SlotScheduler {
    /// Create a scheduler with the given duration bounds.
    #[must_use]
    pub const fn new(limits: DurationLimits) -> Self {
        Self { limits }
    }

    /// Duration bounds enforced by [`SlotScheduler::validate`].
    #[must_use]
    pub const fn limits(&self) -> DurationLimits {
        self.limits
    }

    /// Reject a request with an empty reason or an out-of-range duration.
    ///
    /// Runs before any conflict scan; a rejected request never reaches the
    /// booking set.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Validation`] naming the violated rule.
    pub fn validate(&self, request: &BookingRequest) -> Result<(), ScheduleError> {
        if request.reason.trim().is_empty() {
            return Err(ScheduleError::Validation(
                "reason must not be empty".into(),
            ));
        }
        if request.duration_hours < self.limits.min_hours
            || request.duration_hours > self.limits.max_hours
        {
            return Err(ScheduleError::Validation(format!(
                "duration must be between {} and {} hours, got {}",
                self.limits.min_hours, self.limits.max_hours, request.duration_hours
            )));
        }
        Ok(())
    }

    /// Find the first existing booking that overlaps the candidate interval.
    ///
    /// Each hourly sub-slot of the candidate is tested against every
    /// existing booking using half-open containment, so a booking ending
    /// exactly at the candidate start does not conflict.
    #[must_use]
    pub fn find_conflict<'a>(
        &self,
        candidate_start: NaiveDateTime,
        duration_hours: u32,
        existing: &'a [Booking],
    ) -> Option<&'a Booking> {
        for i in 0..duration_hours.max(1) {
            let check = candidate_start + Duration::hours(i64::from(i));
            if let Some(hit) = existing.iter().find(|b| b.covers(check)) {
                return Some(hit);
            }
        }
        None
    }

    /// Permit deletion by the owner or any administrator.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Authorization`] for anyone else.
    pub fn authorize_delete(&self, actor: Actor, booking: &Booking) -> Result<(), ScheduleError> {
        if actor.is_admin || actor.id == booking.user_id {
            Ok(())
        } else {
            Err(ScheduleError::Authorization(format!(
                "user {} may not remove booking {} owned by {}",
                actor.id, booking.id, booking.user_id
            )))
        }
    }

    /// Derive the state of one hour-aligned cell.
    ///
    /// Occupancy wins over elapse: a covered cell is `Booked` even once in
    /// the past, while an unoccupied past cell is `Past` and not offerable.
    #[must_use]
    pub fn slot_state(
        &self,
        slot_start: NaiveDateTime,
        now: NaiveDateTime,
        bookings: &[Booking],
    ) -> SlotState {
        if let Some(hit) = bookings.iter().find(|b| b.covers(slot_start)) {
            return SlotState::Booked(hit.id);
        }
        if slot_start < now {
            return SlotState::Past;
        }
        SlotState::Free
    }
}
