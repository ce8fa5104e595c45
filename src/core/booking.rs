//! Booking records and the views the scheduler operates on.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::util::ids::{BookingId, UserId};

/// Sector label carried by bookings created by administrators, who have no
/// sector of their own.
pub const ADMIN_SECTOR_LABEL: &str = "Admin";

const fn one_hour() -> u32 {
    1
}

/// A persisted reservation of the meeting room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Identifier of the owning user.
    pub user_id: UserId,
    /// Start of the reserved interval, local wall-clock, hour-aligned.
    pub start: NaiveDateTime,
    /// Sector label carried for display; conflict checking ignores it.
    pub sector: String,
    /// Family name of the owner, denormalized for grid rendering.
    pub user_name: String,
    /// Duration in whole hours. Records missing the field are read as one
    /// hour, matching how legacy stored data behaves.
    #[serde(default = "one_hour")]
    pub duration_hours: u32,
    /// Free-text reason, non-empty and trimmed.
    pub reason: String,
}

impl Booking {
    /// Exclusive end of the reserved interval: `start + duration` hours.
    ///
    /// A zero duration is treated as one hour, the same default applied when
    /// the field is absent from stored data.
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.start + Duration::hours(i64::from(self.duration_hours.max(1)))
    }

    /// Whether `instant` falls inside the half-open interval `[start, end)`.
    #[must_use]
    pub fn covers(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end()
    }
}

/// Caller-supplied parameters for a new or replacement booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Requested start instant, an hour-aligned calendar slot.
    pub start: NaiveDateTime,
    /// Requested duration in whole hours.
    pub duration_hours: u32,
    /// Free-text reason for the reservation.
    pub reason: String,
}

/// The authenticated identity attempting a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// User identifier.
    pub id: UserId,
    /// Administrator flag granting delete rights over any booking.
    pub is_admin: bool,
}

/// View of the acting user that a new booking is denormalized from.
#[derive(Debug, Clone)]
pub struct BookingOwner {
    /// Identifier of the user the booking will belong to.
    pub id: UserId,
    /// Family name copied onto the booking for display.
    pub last_name: String,
    /// Sector of the user; `None` for administrators, whose bookings carry
    /// [`ADMIN_SECTOR_LABEL`] instead.
    pub sector: Option<String>,
}

/// Display/offer state of one hour-aligned calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// Cell is covered by a booking. An elapsed booking stays booked so
    /// history keeps rendering.
    Booked(BookingId),
    /// Cell is unoccupied but lies before the current time; not offerable.
    Past,
    /// Cell is open for a new reservation.
    Free,
}
