//! Sector/role catalogs and branding settings.
//!
//! Plain mutable lists behind the store capability. The only rule worth
//! enforcing is that the reserved default sector and the administrator role
//! can never be deleted, and seeding puts them back if stored data lost
//! them.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::directory::DirectoryError;
use crate::infra::store::CatalogStore;

/// Branding and admin-code settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Logo image reference shown in headers, typically a data URL.
    pub logo: Option<String>,
    /// Background image reference.
    pub background_image: Option<String>,
    /// Code required to register an administrator account.
    pub admin_code: String,
}

/// Catalog and settings management over a shared store handle.
pub struct Catalog<S> {
    store: Arc<Mutex<S>>,
    reserved_sector: String,
    reserved_role: String,
}

impl<S> Catalog<S>
where
    S: CatalogStore,
{
    /// Create a catalog service naming the undeletable entries.
    pub fn new(
        store: Arc<Mutex<S>>,
        reserved_sector: impl Into<String>,
        reserved_role: impl Into<String>,
    ) -> Self {
        Self {
            store,
            reserved_sector: reserved_sector.into(),
            reserved_role: reserved_role.into(),
        }
    }

    /// Install initial data on first use and repair reserved entries.
    ///
    /// A store that has never held sectors or roles receives the initial
    /// lists; one that has keeps its data but gets the reserved sector
    /// prepended or the reserved role appended when missing. Settings are
    /// written only when absent.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn seed(
        &self,
        initial_sectors: &[String],
        initial_roles: &[String],
        initial_admin_code: &str,
    ) -> Result<(), DirectoryError> {
        let mut store = self.store.lock();

        match store.load_sectors()? {
            None => store.save_sectors(initial_sectors)?,
            Some(mut sectors) => {
                if !sectors.iter().any(|s| s == &self.reserved_sector) {
                    sectors.insert(0, self.reserved_sector.clone());
                    store.save_sectors(&sectors)?;
                }
            }
        }

        match store.load_roles()? {
            None => store.save_roles(initial_roles)?,
            Some(mut roles) => {
                if !roles.iter().any(|r| r == &self.reserved_role) {
                    roles.push(self.reserved_role.clone());
                    store.save_roles(&roles)?;
                }
            }
        }

        if store.load_settings()?.is_none() {
            store.save_settings(&Settings {
                logo: None,
                background_image: None,
                admin_code: initial_admin_code.to_owned(),
            })?;
        }

        tracing::debug!("catalog seed complete");
        Ok(())
    }

    /// Current sector list.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn sectors(&self) -> Result<Vec<String>, DirectoryError> {
        Ok(self.store.lock().load_sectors()?.unwrap_or_default())
    }

    /// Add a sector; duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn add_sector(&self, name: &str) -> Result<(), DirectoryError> {
        let mut store = self.store.lock();
        let mut sectors = store.load_sectors()?.unwrap_or_default();
        if !sectors.iter().any(|s| s == name) {
            sectors.push(name.to_owned());
            store.save_sectors(&sectors)?;
        }
        Ok(())
    }

    /// Delete a sector.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ReservedEntry`] for the default sector, or a
    /// wrapped store failure.
    pub fn delete_sector(&self, name: &str) -> Result<(), DirectoryError> {
        if name == self.reserved_sector {
            return Err(DirectoryError::ReservedEntry(name.to_owned()));
        }
        let mut store = self.store.lock();
        let mut sectors = store.load_sectors()?.unwrap_or_default();
        sectors.retain(|s| s != name);
        store.save_sectors(&sectors)?;
        Ok(())
    }

    /// Current role list.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn roles(&self) -> Result<Vec<String>, DirectoryError> {
        Ok(self.store.lock().load_roles()?.unwrap_or_default())
    }

    /// Add a role; duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn add_role(&self, name: &str) -> Result<(), DirectoryError> {
        let mut store = self.store.lock();
        let mut roles = store.load_roles()?.unwrap_or_default();
        if !roles.iter().any(|r| r == name) {
            roles.push(name.to_owned());
            store.save_roles(&roles)?;
        }
        Ok(())
    }

    /// Delete a role.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::ReservedEntry`] for the administrator role, or a
    /// wrapped store failure.
    pub fn delete_role(&self, name: &str) -> Result<(), DirectoryError> {
        if name == self.reserved_role {
            return Err(DirectoryError::ReservedEntry(name.to_owned()));
        }
        let mut store = self.store.lock();
        let mut roles = store.load_roles()?.unwrap_or_default();
        roles.retain(|r| r != name);
        store.save_roles(&roles)?;
        Ok(())
    }

    /// Current settings record, if seeded.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn settings(&self) -> Result<Option<Settings>, DirectoryError> {
        Ok(self.store.lock().load_settings()?)
    }

    /// Replace the logo reference.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn set_logo(&self, logo: Option<String>) -> Result<(), DirectoryError> {
        self.update(|s| s.logo = logo)
    }

    /// Replace the background image reference.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn set_background_image(&self, image: Option<String>) -> Result<(), DirectoryError> {
        self.update(|s| s.background_image = image)
    }

    /// Replace the administrator registration code.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn set_admin_code(&self, code: &str) -> Result<(), DirectoryError> {
        self.update(|s| s.admin_code = code.to_owned())
    }

    fn update(&self, apply: impl FnOnce(&mut Settings)) -> Result<(), DirectoryError> {
        let mut store = self.store.lock();
        let mut settings = store.load_settings()?.unwrap_or_else(|| Settings {
            logo: None,
            background_image: None,
            admin_code: String::new(),
        });
        apply(&mut settings);
        store.save_settings(&settings)?;
        Ok(())
    }
}
