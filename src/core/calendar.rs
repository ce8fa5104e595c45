//! Weekly calendar derivation: Monday-based windows and per-cell slot state.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::booking::{Booking, SlotState};
use crate::core::scheduler::SlotScheduler;

/// Shape of the rendered week: which hour rows and how many weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarShape {
    /// First bookable hour of the day, e.g. 8 for the 08:00 row.
    pub first_hour: u32,
    /// Last bookable hour of the day, inclusive, e.g. 18 for the 18:00 row.
    pub last_hour: u32,
    /// Number of days shown starting Monday; 5 covers Monday through Friday.
    pub weekdays: u32,
}

impl Default for CalendarShape {
    fn default() -> Self {
        Self {
            first_hour: 8,
            last_hour: 18,
            weekdays: 5,
        }
    }
}

impl CalendarShape {
    /// Hour rows in display order.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.first_hour..=self.last_hour
    }

    /// Check the shape describes a drawable grid.
    ///
    /// # Errors
    ///
    /// Returns a message naming the violated bound.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_hour > self.last_hour {
            return Err("first_hour must not exceed last_hour".into());
        }
        if self.last_hour > 23 {
            return Err("last_hour must be at most 23".into());
        }
        if self.weekdays == 0 || self.weekdays > 7 {
            return Err("weekdays must be between 1 and 7".into());
        }
        Ok(())
    }
}

/// Monday of the week containing `day`.
#[must_use]
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// One derived cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCell {
    /// Start instant of the one-hour slot.
    pub start: NaiveDateTime,
    /// Derived display/offer state.
    pub state: SlotState,
}

/// A fully derived week: `days[d]` holds the hour-row cells for weekday `d`.
#[derive(Debug, Clone)]
pub struct WeekGrid {
    /// Monday of the derived week.
    pub monday: NaiveDate,
    /// Cells grouped per weekday, in row order.
    pub days: Vec<Vec<SlotCell>>,
}

/// Derive the state of every cell of the week containing `reference`.
///
/// A multi-hour booking occupies each cell its interval covers. Hours a
/// malformed shape places past 23:00 are skipped rather than drawn.
#[must_use]
pub fn week_grid(
    scheduler: &SlotScheduler,
    shape: CalendarShape,
    reference: NaiveDate,
    now: NaiveDateTime,
    bookings: &[Booking],
) -> WeekGrid {
    let monday = week_start(reference);
    let days = (0..shape.weekdays)
        .map(|d| {
            let date = monday + Duration::days(i64::from(d));
            shape
                .hours()
                .filter_map(|h| date.and_hms_opt(h, 0, 0))
                .map(|start| SlotCell {
                    start,
                    state: scheduler.slot_state(start, now, bookings),
                })
                .collect()
        })
        .collect();
    WeekGrid { monday, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ids::{BookingId, UserId};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn booking(day: u32, hour: u32, hours: u32) -> Booking {
        Booking {
            id: BookingId::new(),
            user_id: UserId::new(),
            start: date(day).and_hms_opt(hour, 0, 0).unwrap(),
            sector: "Depósito".into(),
            user_name: "García".into(),
            duration_hours: hours,
            reason: "team sync".into(),
        }
    }

    #[test]
    fn week_start_maps_any_weekday_to_monday() {
        // 2025-01-06 is a Monday.
        assert_eq!(week_start(date(6)), date(6));
        assert_eq!(week_start(date(8)), date(6));
        assert_eq!(week_start(date(12)), date(6)); // Sunday
    }

    #[test]
    fn grid_has_configured_rows_and_days() {
        let grid = week_grid(
            &SlotScheduler::default(),
            CalendarShape::default(),
            date(8),
            date(6).and_hms_opt(0, 0, 0).unwrap(),
            &[],
        );
        assert_eq!(grid.monday, date(6));
        assert_eq!(grid.days.len(), 5);
        for day in &grid.days {
            assert_eq!(day.len(), 11); // 08:00..=18:00
        }
    }

    #[test]
    fn multi_hour_booking_covers_every_cell() {
        let b = booking(6, 9, 2);
        let id = b.id;
        let grid = week_grid(
            &SlotScheduler::default(),
            CalendarShape::default(),
            date(6),
            date(6).and_hms_opt(0, 0, 0).unwrap(),
            &[b],
        );
        let monday = &grid.days[0];
        assert_eq!(monday[0].state, SlotState::Free); // 08:00
        assert_eq!(monday[1].state, SlotState::Booked(id)); // 09:00
        assert_eq!(monday[2].state, SlotState::Booked(id)); // 10:00
        assert_eq!(monday[3].state, SlotState::Free); // 11:00
    }

    #[test]
    fn elapsed_cells_are_past_unless_booked() {
        let b = booking(6, 8, 1);
        let id = b.id;
        let now = date(6).and_hms_opt(10, 30, 0).unwrap();
        let grid = week_grid(
            &SlotScheduler::default(),
            CalendarShape::default(),
            date(6),
            now,
            &[b],
        );
        let monday = &grid.days[0];
        assert_eq!(monday[0].state, SlotState::Booked(id)); // elapsed but occupied
        assert_eq!(monday[1].state, SlotState::Past); // 09:00, elapsed and free
        assert_eq!(monday[2].state, SlotState::Past); // 10:00 started already
        assert_eq!(monday[3].state, SlotState::Free); // 11:00
    }
}
