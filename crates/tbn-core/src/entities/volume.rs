use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Series;
use crate::enums::{EditionType, ReadingStatus};

/// One owned physical or digital copy of a series at a given number/edition.
///
/// `volume_number` is free-form (`"1"`, `"10.5"`, `"Special"`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Volume {
    pub id: String,
    pub owner_id: String,
    pub series_id: String,
    pub volume_number: String,
    pub edition_type: EditionType,
    pub language: String,
    pub isbn: Option<String>,
    pub status: ReadingStatus,
    pub created_at: DateTime<Utc>,
}

/// A volume joined with its series, as shown on the library dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VolumeWithSeries {
    #[serde(flatten)]
    pub volume: Volume,
    pub series: Series,
}

/// A volume joined with its series plus whether it sits in any collection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VolumeListing {
    #[serde(flatten)]
    pub entry: VolumeWithSeries,
    pub in_collection: bool,
}
