//! User accounts: registration and sign-in.
//!
//! Authentication is a plaintext equality check against stored accounts,
//! exactly like the tool this engine backs. No security property is claimed
//! or intended.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::booking::{Actor, BookingOwner};
use crate::directory::DirectoryError;
use crate::infra::store::{CatalogStore, UserStore};
use crate::util::ids::UserId;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name; denormalized onto bookings for grid display.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email; doubles as the login name, compared case-insensitively.
    pub email: String,
    /// Sector the user belongs to; `None` for administrators.
    pub sector: Option<String>,
    /// Administrator flag.
    pub is_admin: bool,
    /// Role label from the role catalog.
    pub role: String,
    /// Plaintext password.
    pub password: String,
}

impl User {
    /// Identity view used for authorization checks.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            is_admin: self.is_admin,
        }
    }

    /// Owner view a new booking is denormalized from.
    #[must_use]
    pub fn booking_owner(&self) -> BookingOwner {
        BookingOwner {
            id: self.id,
            last_name: self.last_name.clone(),
            sector: self.sector.clone(),
        }
    }
}

/// Parameters of a registration attempt.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email, also the login name.
    pub email: String,
    /// Chosen sector; ignored (and cleared) for administrator registrations.
    pub sector: Option<String>,
    /// Chosen role label.
    pub role: String,
    /// Plaintext password to store.
    pub password: String,
    /// Code required when registering with the administrator role.
    pub admin_code: Option<String>,
}

/// Account directory over a shared store handle.
pub struct Directory<S> {
    store: Arc<Mutex<S>>,
    admin_role: String,
}

impl<S> Directory<S>
where
    S: UserStore + CatalogStore,
{
    /// Create a directory. `admin_role` is the role label that grants the
    /// administrator flag and requires the admin code.
    pub fn new(store: Arc<Mutex<S>>, admin_role: impl Into<String>) -> Self {
        Self {
            store,
            admin_role: admin_role.into(),
        }
    }

    /// Register a new account.
    ///
    /// Administrators must present the code held in settings and end up with
    /// no sector; everyone else must belong to one. Exactly one of the two
    /// holds for every stored account.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::DuplicateEmail`], [`DirectoryError::AdminCodeMismatch`],
    /// [`DirectoryError::MissingSector`], or a wrapped store failure.
    pub fn register(&self, registration: Registration) -> Result<User, DirectoryError> {
        let mut store = self.store.lock();
        let mut users = store.load_users()?;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&registration.email))
        {
            return Err(DirectoryError::DuplicateEmail(registration.email));
        }

        let wants_admin = registration.role == self.admin_role;
        let sector = if wants_admin {
            let expected = store
                .load_settings()?
                .map(|s| s.admin_code)
                .unwrap_or_default();
            if registration.admin_code.as_deref() != Some(expected.as_str()) {
                return Err(DirectoryError::AdminCodeMismatch);
            }
            None
        } else {
            match registration.sector.filter(|s| !s.trim().is_empty()) {
                Some(sector) => Some(sector),
                None => return Err(DirectoryError::MissingSector),
            }
        };

        let user = User {
            id: UserId::new(),
            first_name: registration.first_name,
            last_name: registration.last_name,
            phone: registration.phone,
            email: registration.email,
            sector,
            is_admin: wants_admin,
            role: registration.role,
            password: registration.password,
        };
        users.push(user.clone());
        store.save_users(&users)?;
        drop(store);

        tracing::info!(id = %user.id, admin = user.is_admin, "user registered");
        Ok(user)
    }

    /// Sign in with an email (case-insensitive) and password.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::InvalidCredentials`] for an unknown email or a
    /// wrong password, without saying which, or a wrapped store failure.
    pub fn login(&self, email: &str, password: &str) -> Result<User, DirectoryError> {
        let users = self.store.lock().load_users()?;
        users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
            .ok_or(DirectoryError::InvalidCredentials)
    }

    /// All registered accounts.
    ///
    /// # Errors
    ///
    /// Wrapped store failure.
    pub fn users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.store.lock().load_users()?)
    }
}
