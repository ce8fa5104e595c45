//! Scheduling core: conflict detection, booking operations, and events.

pub mod booking;
pub mod calendar;
pub mod error;
pub mod notify;
pub mod scheduler;
pub mod service;

pub use booking::{Actor, Booking, BookingOwner, BookingRequest, SlotState, ADMIN_SECTOR_LABEL};
pub use calendar::{week_grid, week_start, CalendarShape, SlotCell, WeekGrid};
pub use error::{AppResult, ScheduleError};
pub use notify::{BookingEvent, EmailLogSink, EventKind, InMemoryNotificationSink, NotificationSink};
pub use scheduler::{DurationLimits, SlotScheduler};
pub use service::BookingService;
