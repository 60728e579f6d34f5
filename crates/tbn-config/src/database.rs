//! Library database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".tankobon/library.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only in memory for the process lifetime.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
