//! User accounts, sector/role catalogs, and branding settings.

pub mod catalog;
pub mod users;

use thiserror::Error;

use crate::core::error::ScheduleError;

pub use catalog::{Catalog, Settings};
pub use users::{Directory, Registration, User};

/// Errors produced by account and catalog management.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Registration reuses an email already on file.
    #[error("an account with email {0} already exists")]
    DuplicateEmail(String),
    /// Administrator registration supplied the wrong code.
    #[error("administrator code does not match")]
    AdminCodeMismatch,
    /// Non-administrator registration without a sector.
    #[error("a sector is required for non-administrator accounts")]
    MissingSector,
    /// Unknown email or wrong password; the two are not distinguished.
    #[error("email or password is incorrect")]
    InvalidCredentials,
    /// Attempt to delete a reserved catalog entry.
    #[error("cannot delete reserved entry {0}")]
    ReservedEntry(String),
    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] ScheduleError),
}
