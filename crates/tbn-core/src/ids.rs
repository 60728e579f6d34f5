//! ID prefix constants.
//!
//! IDs are generated by `tbn-db` as `"{prefix}-{16 hex chars}"`.

pub const PREFIX_SERIES: &str = "ser";
pub const PREFIX_VOLUME: &str = "vol";
pub const PREFIX_COLLECTION: &str = "col";

/// Every prefix in use, for exhaustive ID tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_SERIES, PREFIX_VOLUME, PREFIX_COLLECTION];
