//! # Reserva de Sala
//!
//! A conflict-aware reservation engine for a single shared meeting room.
//!
//! This library is the logic layer behind a browser-style room-booking tool:
//! a weekly calendar of hour-aligned slots, booking creation guarded by
//! overlap detection, role-gated cancellation, user registration with an
//! administrator code, sector/role catalogs with reserved entries, and
//! branding settings. All state is client-held; there is no server and no
//! wire protocol.
//!
//! ## Core Model
//!
//! - **One room**: conflict checking is global. A booking's sector is a
//!   descriptive tag, and two sectors can never hold the same hour.
//! - **Half-open intervals**: a booking spans `[start, start + hours)`, so
//!   a meeting ending at 11:00 never collides with one starting at 11:00.
//! - **Confirm-time checks**: the conflict scan runs against a fresh
//!   snapshot inside the create operation itself, closing the gap between
//!   picking a slot and confirming it.
//! - **Idempotent cancel**: cancelling an already-gone booking is a no-op,
//!   not an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use reserva_sala::builders::build_app;
//! use reserva_sala::config::{AppConfig, StorageConfig};
//! use reserva_sala::core::BookingRequest;
//! use reserva_sala::infra::store::MemoryStore;
//! use reserva_sala::util::clock::SystemClock;
//!
//! let cfg = AppConfig::from_env()?;
//! let app = build_app(&cfg, |_| Ok(MemoryStore::new()), SystemClock)?;
//!
//! let user = app.directory.login("ana@teco.com.ar", "secret")?;
//! let booking = app.service.create(&user.booking_owner(), &request)?;
//! ```
//!
//! For complete scenarios, see `tests/scheduling_test.rs` and
//! `tests/authorization_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Scheduling core: conflict detection, booking operations, and events.
pub mod core;
/// Configuration models for the calendar, bookings, directory, and storage.
pub mod config;
/// Builders to construct the wired application from configuration.
pub mod builders;
/// User accounts, catalogs, and settings.
pub mod directory;
/// Infrastructure adapters for storage backends.
pub mod infra;
/// Shared utilities.
pub mod util;
