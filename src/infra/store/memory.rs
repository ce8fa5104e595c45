//! In-memory store for development and tests.

use crate::core::booking::Booking;
use crate::core::error::ScheduleError;
use crate::directory::catalog::Settings;
use crate::directory::users::User;
use crate::infra::store::{BookingStore, CatalogStore, UserStore};

/// Store holding every aggregate in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: Vec<Booking>,
    users: Vec<User>,
    sectors: Option<Vec<String>>,
    roles: Option<Vec<String>>,
    settings: Option<Settings>,
}

impl MemoryStore {
    /// Create an empty, unseeded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn load_bookings(&self) -> Result<Vec<Booking>, ScheduleError> {
        Ok(self.bookings.clone())
    }

    fn save_bookings(&mut self, bookings: &[Booking]) -> Result<(), ScheduleError> {
        self.bookings = bookings.to_vec();
        Ok(())
    }
}

impl UserStore for MemoryStore {
    fn load_users(&self) -> Result<Vec<User>, ScheduleError> {
        Ok(self.users.clone())
    }

    fn save_users(&mut self, users: &[User]) -> Result<(), ScheduleError> {
        self.users = users.to_vec();
        Ok(())
    }
}

impl CatalogStore for MemoryStore {
    fn load_sectors(&self) -> Result<Option<Vec<String>>, ScheduleError> {
        Ok(self.sectors.clone())
    }

    fn save_sectors(&mut self, sectors: &[String]) -> Result<(), ScheduleError> {
        self.sectors = Some(sectors.to_vec());
        Ok(())
    }

    fn load_roles(&self) -> Result<Option<Vec<String>>, ScheduleError> {
        Ok(self.roles.clone())
    }

    fn save_roles(&mut self, roles: &[String]) -> Result<(), ScheduleError> {
        self.roles = Some(roles.to_vec());
        Ok(())
    }

    fn load_settings(&self) -> Result<Option<Settings>, ScheduleError> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), ScheduleError> {
        self.settings = Some(settings.clone());
        Ok(())
    }
}
