use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A canonical manga title shared by all of an owner's volumes of that title.
///
/// `description`, `cover_url` and `external_catalog_id` are only ever filled
/// by enrichment at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Series {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub external_catalog_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Series {
    /// Case-folded key used for per-owner title uniqueness.
    #[must_use]
    pub fn title_key(title: &str) -> String {
        title.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_key_folds_case_and_trims() {
        assert_eq!(Series::title_key("  One Piece "), "one piece");
        assert_eq!(Series::title_key("ONE PIECE"), Series::title_key("one piece"));
    }

    #[test]
    fn title_key_folds_non_ascii() {
        assert_eq!(Series::title_key("ÉCLAIR"), Series::title_key("éclair"));
    }
}
