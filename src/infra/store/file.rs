//! JSON-document store, the on-disk analogue of the original tool's
//! browser storage.
//!
//! All aggregates live in one document keyed the way the browser keys were
//! (`bookings`, `users`, `sectors`, `roles`, `settings`). Writes replace the
//! whole document through a temp-file rename so a crash mid-write never
//! leaves a half-serialized store behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::booking::Booking;
use crate::core::error::ScheduleError;
use crate::directory::catalog::Settings;
use crate::directory::users::User;
use crate::infra::store::{BookingStore, CatalogStore, UserStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    bookings: Vec<Booking>,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    sectors: Option<Vec<String>>,
    #[serde(default)]
    roles: Option<Vec<String>>,
    #[serde(default)]
    settings: Option<Settings>,
}

/// Store persisting every aggregate to a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonFileStore {
    /// Open the store at `path`, reading the document if the file exists
    /// and starting empty otherwise.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Backend`] when the file exists but cannot be read
    /// or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScheduleError> {
        let path = path.into();
        let document = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| ScheduleError::Backend(format!("read {}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| ScheduleError::Backend(format!("decode {}: {e}", path.display())))?
        } else {
            StoreDocument::default()
        };
        Ok(Self { path, document })
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ScheduleError> {
        let raw = serde_json::to_string_pretty(&self.document)
            .map_err(|e| ScheduleError::Backend(format!("encode store: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .map_err(|e| ScheduleError::Backend(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            ScheduleError::Backend(format!("rename into {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}

impl BookingStore for JsonFileStore {
    fn load_bookings(&self) -> Result<Vec<Booking>, ScheduleError> {
        Ok(self.document.bookings.clone())
    }

    fn save_bookings(&mut self, bookings: &[Booking]) -> Result<(), ScheduleError> {
        self.document.bookings = bookings.to_vec();
        self.persist()
    }
}

impl UserStore for JsonFileStore {
    fn load_users(&self) -> Result<Vec<User>, ScheduleError> {
        Ok(self.document.users.clone())
    }

    fn save_users(&mut self, users: &[User]) -> Result<(), ScheduleError> {
        self.document.users = users.to_vec();
        self.persist()
    }
}

impl CatalogStore for JsonFileStore {
    fn load_sectors(&self) -> Result<Option<Vec<String>>, ScheduleError> {
        Ok(self.document.sectors.clone())
    }

    fn save_sectors(&mut self, sectors: &[String]) -> Result<(), ScheduleError> {
        self.document.sectors = Some(sectors.to_vec());
        self.persist()
    }

    fn load_roles(&self) -> Result<Option<Vec<String>>, ScheduleError> {
        Ok(self.document.roles.clone())
    }

    fn save_roles(&mut self, roles: &[String]) -> Result<(), ScheduleError> {
        self.document.roles = Some(roles.to_vec());
        self.persist()
    }

    fn load_settings(&self) -> Result<Option<Settings>, ScheduleError> {
        Ok(self.document.settings.clone())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), ScheduleError> {
        self.document.settings = Some(settings.clone());
        self.persist()
    }
}
