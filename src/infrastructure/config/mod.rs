//! Settings loading infrastructure
//!
//! Layered settings using figment:
//! - Declared defaults
//! - `.env` file values (parsed with dotenvy)
//! - Environment variable overrides
//!
//! Variables use the deployment names (`POLYGON_RPC_URL`, `PRIVATE_KEY`, ...)
//! with no prefix and are matched case-insensitively.

pub mod env_file;
pub mod loader;

pub use loader::{SettingsError, SettingsLoader, DEFAULT_ENV_FILE};

use crate::domain::models::Settings;

/// Load settings from `.env` and the process environment.
pub fn load() -> Result<Settings, SettingsError> {
    SettingsLoader::load()
}
