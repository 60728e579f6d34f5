use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::VolumeWithSeries;

/// A user-defined named grouping of volumes. Names are not unique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the `collection_volumes` junction. Unique per pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionMembership {
    pub collection_id: String,
    pub volume_id: String,
    pub created_at: DateTime<Utc>,
}

/// A collection with its derived member count and cover.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionSummary {
    #[serde(flatten)]
    pub collection: Collection,
    pub volume_count: u64,
    /// Cover of the earliest-attached member whose series has one.
    pub cover_url: Option<String>,
}

/// A collection and its members in attach order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionDetails {
    pub collection: Collection,
    pub volumes: Vec<VolumeWithSeries>,
}
