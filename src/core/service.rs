//! Booking operations over an injected store, clock, and notification sink.
//!
//! Every operation is synchronous and completes within the call: the store
//! lock is held from snapshot load through save, so a conflict check can
//! never be invalidated by another mutation of the same handle in between.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;

use crate::core::booking::{
    Actor, Booking, BookingOwner, BookingRequest, ADMIN_SECTOR_LABEL,
};
use crate::core::calendar::{week_grid, CalendarShape, WeekGrid};
use crate::core::error::ScheduleError;
use crate::core::notify::{BookingEvent, EventKind, NotificationSink};
use crate::core::scheduler::SlotScheduler;
use crate::infra::store::BookingStore;
use crate::util::clock::Clock;
use crate::util::ids::{BookingId, UserId};

/// Booking service: create, cancel, and replace reservations.
///
/// Generic over the store backend and the clock so tests can pin both.
pub struct BookingService<S, C> {
    scheduler: SlotScheduler,
    shape: CalendarShape,
    store: Arc<Mutex<S>>,
    clock: C,
    notifier: Option<Arc<Mutex<Box<dyn NotificationSink>>>>,
}

impl<S, C> BookingService<S, C>
where
    S: BookingStore,
    C: Clock,
{
    /// Create a service over a shared store handle.
    pub fn new(
        scheduler: SlotScheduler,
        shape: CalendarShape,
        store: Arc<Mutex<S>>,
        clock: C,
    ) -> Self {
        Self {
            scheduler,
            shape,
            store,
            clock,
            notifier: None,
        }
    }

    /// Attach a notification sink fed on every successful mutation.
    #[must_use]
    pub fn with_notifier(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.notifier = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// The scheduler this service validates and checks conflicts with.
    #[must_use]
    pub const fn scheduler(&self) -> &SlotScheduler {
        &self.scheduler
    }

    /// Create a booking for `owner` from a validated, conflict-free request.
    ///
    /// Validation and the conflict scan both run here, at confirm time,
    /// against a fresh snapshot; a check done earlier when the slot was
    /// picked does not count.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Validation`] for a bad duration or empty reason,
    /// [`ScheduleError::SlotInPast`] when the start has already elapsed,
    /// [`ScheduleError::Conflict`] with the blocking booking's id, or
    /// [`ScheduleError::Backend`] if the store fails. Nothing is persisted
    /// on any error.
    pub fn create(
        &self,
        owner: &BookingOwner,
        request: &BookingRequest,
    ) -> Result<Booking, ScheduleError> {
        self.scheduler.validate(request)?;
        let now = self.clock.now();
        if request.start < now {
            tracing::warn!(start = %request.start, "rejected booking into the past");
            return Err(ScheduleError::SlotInPast);
        }

        let mut store = self.store.lock();
        let mut bookings = store.load_bookings()?;
        if let Some(hit) =
            self.scheduler
                .find_conflict(request.start, request.duration_hours, &bookings)
        {
            tracing::info!(conflict = %hit.id, start = %request.start, "slot already taken");
            return Err(ScheduleError::Conflict(hit.id));
        }

        let booking = Booking {
            id: BookingId::new(),
            user_id: owner.id,
            start: request.start,
            sector: owner
                .sector
                .clone()
                .unwrap_or_else(|| ADMIN_SECTOR_LABEL.to_owned()),
            user_name: owner.last_name.clone(),
            duration_hours: request.duration_hours,
            reason: request.reason.trim().to_owned(),
        };
        bookings.push(booking.clone());
        store.save_bookings(&bookings)?;
        drop(store);

        tracing::info!(
            id = %booking.id,
            start = %booking.start,
            hours = booking.duration_hours,
            "booking created"
        );
        self.notify(EventKind::Created, booking.clone(), owner.id, now);
        Ok(booking)
    }

    /// Cancel a booking. Unknown ids are a no-op returning `false`, so a
    /// repeated cancel is idempotent rather than an error.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Authorization`] when `actor` is neither the owner
    /// nor an administrator, or [`ScheduleError::Backend`] on store failure.
    pub fn cancel(&self, actor: Actor, id: BookingId) -> Result<bool, ScheduleError> {
        let now = self.clock.now();
        let mut store = self.store.lock();
        let mut bookings = store.load_bookings()?;
        let Some(pos) = bookings.iter().position(|b| b.id == id) else {
            tracing::debug!(%id, "cancel of unknown booking ignored");
            return Ok(false);
        };
        self.scheduler.authorize_delete(actor, &bookings[pos])?;
        let removed = bookings.remove(pos);
        store.save_bookings(&bookings)?;
        drop(store);

        tracing::info!(id = %removed.id, "booking cancelled");
        self.notify(EventKind::Deleted, removed, actor.id, now);
        Ok(true)
    }

    /// Replace a booking wholesale: the only mutation path, equivalent to
    /// delete plus recreate in one operation. The id and owner are kept;
    /// start, duration, and reason come from the request.
    ///
    /// # Errors
    ///
    /// As [`BookingService::create`] plus [`ScheduleError::Authorization`]
    /// under the same rules as cancel; a request naming an unknown id is
    /// [`ScheduleError::Validation`].
    pub fn replace(
        &self,
        actor: Actor,
        id: BookingId,
        request: &BookingRequest,
    ) -> Result<Booking, ScheduleError> {
        self.scheduler.validate(request)?;
        let now = self.clock.now();
        if request.start < now {
            return Err(ScheduleError::SlotInPast);
        }

        let mut store = self.store.lock();
        let mut bookings = store.load_bookings()?;
        let Some(pos) = bookings.iter().position(|b| b.id == id) else {
            return Err(ScheduleError::Validation(format!("unknown booking {id}")));
        };
        self.scheduler.authorize_delete(actor, &bookings[pos])?;

        let others: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.id != id)
            .cloned()
            .collect();
        if let Some(hit) =
            self.scheduler
                .find_conflict(request.start, request.duration_hours, &others)
        {
            tracing::info!(conflict = %hit.id, "replacement slot already taken");
            return Err(ScheduleError::Conflict(hit.id));
        }

        let previous = &bookings[pos];
        let replacement = Booking {
            id: previous.id,
            user_id: previous.user_id,
            start: request.start,
            sector: previous.sector.clone(),
            user_name: previous.user_name.clone(),
            duration_hours: request.duration_hours,
            reason: request.reason.trim().to_owned(),
        };
        bookings[pos] = replacement.clone();
        store.save_bookings(&bookings)?;
        drop(store);

        tracing::info!(id = %replacement.id, start = %replacement.start, "booking replaced");
        self.notify(EventKind::Updated, replacement.clone(), actor.id, now);
        Ok(replacement)
    }

    /// Current full booking list, sorted by start instant.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on store failure.
    pub fn bookings(&self) -> Result<Vec<Booking>, ScheduleError> {
        let mut bookings = self.store.lock().load_bookings()?;
        bookings.sort_by_key(|b| b.start);
        Ok(bookings)
    }

    /// Derive the weekly grid for the week containing `reference`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on store failure.
    pub fn week(&self, reference: NaiveDate) -> Result<WeekGrid, ScheduleError> {
        let bookings = self.store.lock().load_bookings()?;
        Ok(week_grid(
            &self.scheduler,
            self.shape,
            reference,
            self.clock.now(),
            &bookings,
        ))
    }

    fn notify(&self, kind: EventKind, booking: Booking, actor: UserId, occurred_at: NaiveDateTime) {
        if let Some(sink) = &self.notifier {
            sink.lock().record(BookingEvent {
                kind,
                booking,
                actor,
                occurred_at,
            });
        }
    }
}
