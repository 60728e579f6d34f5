//! Entity structs for all Tankobon domain objects.
//!
//! Each persisted entity maps to a table in the libSQL database:
//! `series`, `volumes`, `collections`, and the `collection_volumes` junction.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod collection;
mod series;
mod volume;

pub use collection::{Collection, CollectionDetails, CollectionMembership, CollectionSummary};
pub use series::Series;
pub use volume::{Volume, VolumeListing, VolumeWithSeries};
