//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `TANKOBON_*` variable could not be read into the
    /// config structs.
    #[error("failed to load tankobon configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value deserialized but cannot be used.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
