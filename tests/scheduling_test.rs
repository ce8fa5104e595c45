//! Conflict-detection and validation scenarios for the booking service.
//!
//! These exercise the complete create path: validation, past-slot rejection,
//! the confirm-time conflict re-check, and event emission.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use reserva_sala::core::{
    BookingOwner, BookingRequest, BookingService, CalendarShape, EventKind,
    InMemoryNotificationSink, ScheduleError, SlotScheduler, SlotState,
};
use reserva_sala::infra::store::MemoryStore;
use reserva_sala::util::clock::FixedClock;
use reserva_sala::util::ids::UserId;

// 2025-01-06 is a Monday.
fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn owner() -> BookingOwner {
    BookingOwner {
        id: UserId::new(),
        last_name: "García".into(),
        sector: Some("Depósito".into()),
    }
}

fn request(start: NaiveDateTime, hours: u32) -> BookingRequest {
    BookingRequest {
        start,
        duration_hours: hours,
        reason: "team sync".into(),
    }
}

fn service_at(
    now: NaiveDateTime,
) -> (
    BookingService<MemoryStore, FixedClock>,
    InMemoryNotificationSink,
) {
    let sink = InMemoryNotificationSink::new(32);
    let service = BookingService::new(
        SlotScheduler::default(),
        CalendarShape::default(),
        Arc::new(Mutex::new(MemoryStore::new())),
        FixedClock(now),
    )
    .with_notifier(Box::new(sink.clone()));
    (service, sink)
}

#[test]
fn free_slot_booking_succeeds() {
    let (service, sink) = service_at(at(6, 8));
    let owner = owner();

    let booking = service.create(&owner, &request(at(6, 9), 2)).unwrap();

    assert_eq!(booking.user_id, owner.id);
    assert_eq!(booking.sector, "Depósito");
    assert_eq!(booking.end(), at(6, 11));
    assert_eq!(service.bookings().unwrap().len(), 1);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::Created);
    assert_eq!(events[0].booking.id, booking.id);
    assert_eq!(events[0].actor, owner.id);
}

#[test]
fn slot_inside_existing_interval_is_rejected() {
    // Existing 09:00 for two hours blocks 10:00, which falls in [09:00, 11:00).
    let (service, _) = service_at(at(6, 8));
    let existing = service.create(&owner(), &request(at(6, 9), 2)).unwrap();

    let err = service.create(&owner(), &request(at(6, 10), 1)).unwrap_err();
    assert!(matches!(err, ScheduleError::Conflict(id) if id == existing.id));
    assert_eq!(service.bookings().unwrap().len(), 1);
}

#[test]
fn slot_starting_at_existing_end_is_allowed() {
    let (service, _) = service_at(at(6, 8));
    service.create(&owner(), &request(at(6, 9), 2)).unwrap();

    // Half-open intervals: [09:00, 11:00) and [11:00, 12:00) touch but do
    // not overlap.
    service.create(&owner(), &request(at(6, 11), 1)).unwrap();
    assert_eq!(service.bookings().unwrap().len(), 2);
}

#[test]
fn slot_ending_at_existing_start_is_allowed() {
    let (service, _) = service_at(at(6, 8));
    service.create(&owner(), &request(at(6, 11), 1)).unwrap();

    service.create(&owner(), &request(at(6, 9), 2)).unwrap();
    assert_eq!(service.bookings().unwrap().len(), 2);
}

#[test]
fn multi_hour_tail_overlap_is_rejected() {
    // Candidate [10:00, 12:00) reaches into the existing [11:00, 12:00).
    let (service, _) = service_at(at(6, 8));
    let existing = service.create(&owner(), &request(at(6, 11), 1)).unwrap();

    let err = service.create(&owner(), &request(at(6, 10), 2)).unwrap_err();
    assert!(matches!(err, ScheduleError::Conflict(id) if id == existing.id));
}

#[test]
fn out_of_range_duration_is_rejected_before_conflicts() {
    let (service, _) = service_at(at(6, 8));
    service.create(&owner(), &request(at(6, 9), 2)).unwrap();

    // Both land on an occupied slot, yet the error is validation, not
    // conflict: bounds are checked first.
    for hours in [0, 11] {
        let err = service.create(&owner(), &request(at(6, 9), hours)).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
    }
    assert_eq!(service.bookings().unwrap().len(), 1);
}

#[test]
fn blank_reason_is_rejected() {
    let (service, _) = service_at(at(6, 8));
    let req = BookingRequest {
        start: at(6, 9),
        duration_hours: 1,
        reason: "   ".into(),
    };
    let err = service.create(&owner(), &req).unwrap_err();
    assert!(matches!(err, ScheduleError::Validation(_)));
}

#[test]
fn past_slot_is_rejected() {
    let (service, sink) = service_at(at(6, 12));
    let err = service.create(&owner(), &request(at(6, 9), 1)).unwrap_err();
    assert!(matches!(err, ScheduleError::SlotInPast));
    assert!(sink.events().is_empty());
}

#[test]
fn conflict_is_rechecked_at_confirm_time() {
    // Two users picked the same free slot; the second confirm runs against
    // the fresh snapshot and is rejected.
    let (service, _) = service_at(at(6, 8));
    let first = service.create(&owner(), &request(at(6, 9), 1)).unwrap();

    let err = service.create(&owner(), &request(at(6, 9), 1)).unwrap_err();
    assert!(matches!(err, ScheduleError::Conflict(id) if id == first.id));
}

#[test]
fn admin_owner_without_sector_gets_fallback_label() {
    let (service, _) = service_at(at(6, 8));
    let admin = BookingOwner {
        id: UserId::new(),
        last_name: "Suárez".into(),
        sector: None,
    };
    let booking = service.create(&admin, &request(at(6, 9), 1)).unwrap();
    assert_eq!(booking.sector, "Admin");
}

#[test]
fn reason_is_trimmed_on_persist() {
    let (service, _) = service_at(at(6, 8));
    let req = BookingRequest {
        start: at(6, 9),
        duration_hours: 1,
        reason: "  planning  ".into(),
    };
    let booking = service.create(&owner(), &req).unwrap();
    assert_eq!(booking.reason, "planning");
}

#[test]
fn week_grid_reflects_bookings_and_elapsed_slots() {
    let (service, _) = service_at(at(6, 10));
    // 10:00 is "now": 10:00 itself is still bookable, 09:00 is not.
    let booking = service.create(&owner(), &request(at(7, 9), 2)).unwrap();

    let grid = service.week(NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()).unwrap();
    assert_eq!(grid.monday, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());

    let monday = &grid.days[0];
    assert_eq!(monday[0].state, SlotState::Past); // Mon 08:00
    assert_eq!(monday[1].state, SlotState::Past); // Mon 09:00
    assert_eq!(monday[2].state, SlotState::Free); // Mon 10:00

    let tuesday = &grid.days[1];
    assert_eq!(tuesday[1].state, SlotState::Booked(booking.id)); // Tue 09:00
    assert_eq!(tuesday[2].state, SlotState::Booked(booking.id)); // Tue 10:00
    assert_eq!(tuesday[3].state, SlotState::Free); // Tue 11:00
}
