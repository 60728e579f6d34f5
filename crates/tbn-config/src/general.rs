//! General application configuration.

use serde::{Deserialize, Serialize};
use tbn_core::import::{DEFAULT_EDITION, DEFAULT_LANGUAGE};

fn default_owner_id() -> String {
    "local".to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_edition() -> String {
    DEFAULT_EDITION.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Owner every repository call is scoped to.
    #[serde(default = "default_owner_id")]
    pub owner_id: String,

    /// Language for manually added volumes when none is given.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Edition for manually added volumes when none is given.
    #[serde(default = "default_edition")]
    pub default_edition: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            owner_id: default_owner_id(),
            default_language: default_language(),
            default_edition: default_edition(),
        }
    }
}
