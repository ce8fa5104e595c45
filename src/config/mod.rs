//! Configuration models for the calendar, bookings, directory, and storage.

pub mod app;

pub use app::{AppConfig, BookingConfig, DirectoryConfig, StorageConfig};
