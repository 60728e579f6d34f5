//! External metadata provider configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

fn default_google_books_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".to_string()
}

fn default_anilist_url() -> String {
    "https://graphql.anilist.co".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "tankobon/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Whether series enrichment and ISBN lookups hit the network at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Google Books volumes endpoint (ISBN lookups).
    #[serde(default = "default_google_books_url")]
    pub google_books_url: String,

    /// AniList GraphQL endpoint (title lookups).
    #[serde(default = "default_anilist_url")]
    pub anilist_url: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            google_books_url: default_google_books_url(),
            anilist_url: default_anilist_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl MetadataConfig {
    /// Check if lookups are enabled and both endpoints are set.
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.google_books_url.is_empty() && !self.anilist_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_configured() {
        let config = MetadataConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.anilist_url, "https://graphql.anilist.co");
    }

    #[test]
    fn disabled_is_not_configured() {
        let config = MetadataConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn missing_endpoint_is_not_configured() {
        let config = MetadataConfig {
            anilist_url: String::new(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
