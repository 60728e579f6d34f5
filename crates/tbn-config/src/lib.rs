//! # tbn-config
//!
//! Layered configuration loading for Tankobon using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TANKOBON_*` prefix, `__` as separator)
//! 2. Project-level `.tankobon/config.toml`
//! 3. User-level `~/.config/tankobon/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TANKOBON_DATABASE__PATH` -> `database.path`,
//! `TANKOBON_METADATA__ENABLED` -> `metadata.enabled`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tbn_config::TankobonConfig;
//!
//! let config = TankobonConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if config.metadata.is_configured() {
//!     println!("AniList endpoint: {}", config.metadata.anilist_url);
//! }
//! ```

mod database;
mod error;
mod general;
mod metadata;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use metadata::MetadataConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tbn_core::enums::EditionType;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TankobonConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TankobonConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".tankobon/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TANKOBON_").split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.owner_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.owner_id".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.metadata.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "metadata.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        self.general
            .default_edition
            .parse::<EditionType>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "general.default_edition".into(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tankobon").join("config.toml"))
    }
}
