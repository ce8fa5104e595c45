//! Construct a wired reservation app from configuration.

use std::sync::Arc;

use anyhow::Context;
use parking_lot::Mutex;

use crate::config::{AppConfig, StorageConfig};
use crate::core::error::{AppResult, ScheduleError};
use crate::core::notify::EmailLogSink;
use crate::core::scheduler::{DurationLimits, SlotScheduler};
use crate::core::service::BookingService;
use crate::directory::catalog::Catalog;
use crate::directory::users::Directory;
use crate::infra::store::{BookingStore, CatalogStore, UserStore};
use crate::util::clock::Clock;

/// The wired application: booking operations plus account and catalog
/// management sharing one store handle.
pub struct App<S, C> {
    /// Booking create/cancel/replace and grid derivation.
    pub service: BookingService<S, C>,
    /// Registration and sign-in.
    pub directory: Directory<S>,
    /// Sector/role catalogs and settings.
    pub catalog: Catalog<S>,
}

/// Build the app from validated configuration using a caller-supplied store
/// factory, seeding catalogs and settings on first use. The service gets the
/// simulated-email sink attached, matching the tool's behavior of mailing
/// every change.
///
/// # Errors
///
/// Config validation failures, store construction failures, and seeding
/// failures, each with context.
pub fn build_app<S, C, F>(cfg: &AppConfig, mut store_factory: F, clock: C) -> AppResult<App<S, C>>
where
    S: BookingStore + UserStore + CatalogStore,
    C: Clock,
    F: FnMut(&StorageConfig) -> Result<S, ScheduleError>,
{
    cfg.validate()
        .map_err(|e| anyhow::anyhow!("config invalid: {e}"))?;

    let store = Arc::new(Mutex::new(
        store_factory(&cfg.storage).context("constructing store backend")?,
    ));

    let catalog = Catalog::new(
        Arc::clone(&store),
        cfg.directory.default_sector.clone(),
        cfg.directory.admin_role.clone(),
    );
    catalog
        .seed(
            &cfg.directory.initial_sectors,
            &cfg.directory.initial_roles,
            &cfg.directory.admin_code,
        )
        .context("seeding catalogs")?;

    let scheduler = SlotScheduler::new(DurationLimits {
        min_hours: cfg.booking.min_duration_hours,
        max_hours: cfg.booking.max_duration_hours,
    });
    let service = BookingService::new(scheduler, cfg.calendar, Arc::clone(&store), clock)
        .with_notifier(Box::new(EmailLogSink));
    let directory = Directory::new(store, cfg.directory.admin_role.clone());

    tracing::info!("reservation app wired");
    Ok(App {
        service,
        directory,
        catalog,
    })
}
