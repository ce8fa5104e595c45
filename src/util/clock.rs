//! Wall-clock access behind a trait so "now" can be pinned in tests.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
///
/// The engine only ever compares instants in the client's local time; no
/// timezone conversion is performed anywhere.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The instant every call to [`Clock::now`] reports.
    pub NaiveDateTime,
);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
