//! Response types returned as JSON by `tbn` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Volume;

/// Response from `tbn volume add`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AddedVolume {
    pub volume: Volume,
    /// Collection the volume ended up in. `None` when no collection was
    /// requested or the best-effort attach failed.
    pub collection_id: Option<String>,
}

/// Aggregate result of a bulk import. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportOutcome {
    pub total: u64,
    pub success_count: u64,
    pub failure_count: u64,
    /// One human-readable message per failed row, in input order.
    pub errors: Vec<String>,
}

impl ImportOutcome {
    pub fn record_success(&mut self) {
        self.total += 1;
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.total += 1;
        self.failure_count += 1;
        self.errors.push(message.into());
    }
}

/// Response from bulk status/delete commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BulkResponse {
    pub requested: u64,
    pub affected: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_track_messages() {
        let mut outcome = ImportOutcome::default();
        outcome.record_success();
        outcome.record_failure("row 2 broke");
        outcome.record_success();
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.failure_count, 1);
        assert_eq!(outcome.errors, vec!["row 2 broke".to_string()]);
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let json = serde_json::to_value(ImportOutcome::default()).unwrap();
        assert!(json.get("successCount").is_some());
        assert!(json.get("failureCount").is_some());
        assert!(json.get("errors").is_some());
    }
}
