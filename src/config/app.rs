//! Application configuration structures.

use serde::{Deserialize, Serialize};

use crate::core::calendar::CalendarShape;

/// Bounds on booking durations, in whole hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Smallest accepted duration.
    pub min_duration_hours: u32,
    /// Largest accepted duration.
    pub max_duration_hours: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_duration_hours: 1,
            max_duration_hours: 10,
        }
    }
}

/// Directory seeding values and reserved catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Admin registration code installed on first run.
    pub admin_code: String,
    /// Role label that grants the administrator flag; undeletable.
    pub admin_role: String,
    /// Sector installed on first run that can never be deleted.
    pub default_sector: String,
    /// Sector list installed when the store has never held sectors.
    pub initial_sectors: Vec<String>,
    /// Role list installed when the store has never held roles.
    pub initial_roles: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            admin_code: "TECO2025".into(),
            admin_role: "Administrador".into(),
            default_sector: "Facilities & Servicios".into(),
            initial_sectors: [
                "Facilities & Servicios",
                "Operación Costa del Paraná",
                "Depósito",
                "Higiene & Seguridad",
                "Eventos French I",
                "Eventos French II",
                "Red French I",
                "Red French II",
                "Servicios Especiales",
                "Red Garay",
                "Eventos Garay",
                "Comercial & Marketing",
                "Capital Humano",
            ]
            .map(String::from)
            .to_vec(),
            initial_roles: [
                "Empleado",
                "Supervisor",
                "Coordinador",
                "Jefe",
                "Gerente",
                "Administrador",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Storage backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageConfig {
    /// In-memory store; state is gone when the process exits.
    InMemory,
    /// Single JSON document at the given path.
    File {
        /// Location of the document.
        path: String,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::InMemory
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Weekly grid shape.
    pub calendar: CalendarShape,
    /// Booking duration bounds.
    pub booking: BookingConfig,
    /// Seeding values and reserved entries.
    pub directory: DirectoryConfig,
    /// Storage backend.
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Validate all values.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first violated rule.
    pub fn validate(&self) -> Result<(), String> {
        self.calendar.validate()?;
        if self.booking.min_duration_hours == 0 {
            return Err("min_duration_hours must be at least 1".into());
        }
        if self.booking.min_duration_hours > self.booking.max_duration_hours {
            return Err("min_duration_hours must not exceed max_duration_hours".into());
        }
        if self.directory.admin_code.is_empty() {
            return Err("admin_code must not be empty".into());
        }
        if self.directory.admin_role.is_empty() || self.directory.default_sector.is_empty() {
            return Err("reserved catalog entries must not be empty".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation message.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the file named by `RESERVA_CONFIG`, falling
    /// back to defaults when the variable is unset. A `.env` file next to
    /// the process is honored.
    ///
    /// # Errors
    ///
    /// Returns the read, parse, or validation message.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        match std::env::var("RESERVA_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| format!("read config {path}: {e}"))?;
                Self::from_json_str(&raw)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_minimum_duration() {
        let mut cfg = AppConfig::default();
        cfg.booking.min_duration_hours = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_calendar_hours() {
        let mut cfg = AppConfig::default();
        cfg.calendar.first_hour = 19;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn parses_partial_json_with_defaults() {
        let cfg = AppConfig::from_json_str(
            r#"{ "storage": { "file": { "path": "/tmp/reserva.json" } } }"#,
        )
        .unwrap();
        assert!(matches!(cfg.storage, StorageConfig::File { .. }));
        assert_eq!(cfg.booking.max_duration_hours, 10);
        assert_eq!(cfg.directory.initial_sectors.len(), 13);
    }
}
