//! Storage capability traits and backends.
//!
//! The engine only ever sees aggregate snapshots through these traits; the
//! backing mechanism, process memory or a JSON document on disk standing in
//! for the original tool's browser storage, stays invisible to it. Catalog
//! loads distinguish "never stored" from "stored empty" because seeding
//! behaves differently in the two cases.

pub mod file;
pub mod memory;

use crate::core::booking::Booking;
use crate::core::error::ScheduleError;
use crate::directory::catalog::Settings;
use crate::directory::users::User;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save capability over the booking aggregate.
pub trait BookingStore: Send {
    /// Current full booking list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on read or decode failure.
    fn load_bookings(&self) -> Result<Vec<Booking>, ScheduleError>;

    /// Replace the persisted booking list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on write failure.
    fn save_bookings(&mut self, bookings: &[Booking]) -> Result<(), ScheduleError>;
}

/// Load/save capability over the user aggregate.
pub trait UserStore: Send {
    /// All registered accounts.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on read or decode failure.
    fn load_users(&self) -> Result<Vec<User>, ScheduleError>;

    /// Replace the persisted account list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on write failure.
    fn save_users(&mut self, users: &[User]) -> Result<(), ScheduleError>;
}

/// Load/save capability over catalogs and settings.
pub trait CatalogStore: Send {
    /// Stored sector list, `None` when never written.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on read or decode failure.
    fn load_sectors(&self) -> Result<Option<Vec<String>>, ScheduleError>;

    /// Replace the persisted sector list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on write failure.
    fn save_sectors(&mut self, sectors: &[String]) -> Result<(), ScheduleError>;

    /// Stored role list, `None` when never written.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on read or decode failure.
    fn load_roles(&self) -> Result<Option<Vec<String>>, ScheduleError>;

    /// Replace the persisted role list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on write failure.
    fn save_roles(&mut self, roles: &[String]) -> Result<(), ScheduleError>;

    /// Stored settings record, `None` when never written.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on read or decode failure.
    fn load_settings(&self) -> Result<Option<Settings>, ScheduleError>;

    /// Replace the persisted settings record.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] on write failure.
    fn save_settings(&mut self, settings: &Settings) -> Result<(), ScheduleError>;
}
