//! Notification sinks fed by booking mutations.
//!
//! The service emits one structured event per successful mutation; sinks
//! decide how to surface it. The engine itself never formats or dispatches
//! anything user-facing.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::booking::Booking;
use crate::util::ids::UserId;

/// Kind of mutation an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A booking was appended.
    Created,
    /// A booking was replaced wholesale (delete plus recreate).
    Updated,
    /// A booking was removed.
    Deleted,
}

/// Structured record of one successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingEvent {
    /// Mutation kind.
    pub kind: EventKind,
    /// Snapshot of the affected booking: the post-image for create and
    /// update, the pre-image for delete.
    pub booking: Booking,
    /// User who performed the mutation.
    pub actor: UserId,
    /// When the mutation happened.
    pub occurred_at: NaiveDateTime,
}

/// Notification sink abstraction.
pub trait NotificationSink: Send {
    /// Record one booking event.
    fn record(&mut self, event: BookingEvent);
}

/// In-memory sink with a bounded buffer, for testing and dev.
///
/// Clones share the same buffer, so a test can keep a handle and inspect
/// events after handing a clone to the service.
#[derive(Debug, Clone)]
pub struct InMemoryNotificationSink {
    events: Arc<Mutex<VecDeque<BookingEvent>>>,
    max_events: usize,
}

impl InMemoryNotificationSink {
    /// Create a sink retaining at most `max_events` entries.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events))),
            max_events,
        }
    }

    /// Snapshot of the stored events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<BookingEvent> {
        self.events.lock().iter().cloned().collect()
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn record(&mut self, event: BookingEvent) {
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Sink that renders each event as the all-users broadcast email the room
/// tool sends on every change, written to the log instead of a mail service.
#[derive(Debug, Default)]
pub struct EmailLogSink;

impl EmailLogSink {
    const fn subject(kind: EventKind) -> &'static str {
        match kind {
            EventKind::Created => "New meeting-room booking",
            EventKind::Updated => "Meeting-room booking modified",
            EventKind::Deleted => "Meeting-room booking cancelled",
        }
    }
}

impl NotificationSink for EmailLogSink {
    fn record(&mut self, event: BookingEvent) {
        let booking = &event.booking;
        tracing::info!(
            subject = Self::subject(event.kind),
            sector = %booking.sector,
            user = %booking.user_name,
            date = %booking.start.format("%d/%m/%Y"),
            from = %booking.start.format("%H:%M"),
            to = %booking.end().format("%H:%M"),
            reason = %booking.reason,
            "simulated booking notification email"
        );
    }
}
