//! Reading status and edition enums for Tankobon.
//!
//! `ReadingStatus` serializes in `snake_case` (`"unread"`, `"completed"`), while
//! `EditionType` keeps its capitalized catalog spelling (`"Standard"`,
//! `"Omnibus"`). Both parse case-insensitively from user input via `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ReadingStatus
// ---------------------------------------------------------------------------

/// Where the owner is with a volume.
///
/// Any status may be set from any other; there is no enforced lifecycle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    Unread,
    Reading,
    Completed,
    Collected,
}

impl ReadingStatus {
    pub const ALL: [Self; 4] = [Self::Unread, Self::Reading, Self::Completed, Self::Collected];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Reading => "reading",
            Self::Completed => "completed",
            Self::Collected => "collected",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::Validation(format!("unknown reading status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// EditionType
// ---------------------------------------------------------------------------

/// Physical or digital edition of a volume.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum EditionType {
    #[default]
    Standard,
    Omnibus,
    Deluxe,
    Digital,
}

impl EditionType {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Omnibus, Self::Deluxe, Self::Digital];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Omnibus => "Omnibus",
            Self::Deluxe => "Deluxe",
            Self::Digital => "Digital",
        }
    }
}

impl fmt::Display for EditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|edition| edition.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::Validation(format!("unknown edition type '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("unread", ReadingStatus::Unread)]
    #[case("Reading", ReadingStatus::Reading)]
    #[case(" COMPLETED ", ReadingStatus::Completed)]
    #[case("collected", ReadingStatus::Collected)]
    fn reading_status_parses(#[case] input: &str, #[case] expected: ReadingStatus) {
        assert_eq!(input.parse::<ReadingStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case("standard", EditionType::Standard)]
    #[case("Omnibus", EditionType::Omnibus)]
    #[case("DELUXE", EditionType::Deluxe)]
    #[case(" digital", EditionType::Digital)]
    fn edition_type_parses(#[case] input: &str, #[case] expected: EditionType) {
        assert_eq!(input.parse::<EditionType>().unwrap(), expected);
    }

    #[test]
    fn unknown_values_are_validation_errors() {
        assert!(matches!(
            "finished".parse::<ReadingStatus>(),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            "hardcover".parse::<EditionType>(),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn defaults_match_new_volume_defaults() {
        assert_eq!(ReadingStatus::default(), ReadingStatus::Unread);
        assert_eq!(EditionType::default(), EditionType::Standard);
    }

    #[test]
    fn serde_spelling_matches_storage_spelling() {
        for status in ReadingStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.as_str().to_string()));
        }
        for edition in EditionType::ALL {
            let json = serde_json::to_value(edition).unwrap();
            assert_eq!(json, serde_json::Value::String(edition.as_str().to_string()));
        }
    }
}
