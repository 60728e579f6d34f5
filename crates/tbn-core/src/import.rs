//! Import rows and canonical field mapping.
//!
//! Bulk import input is header-keyed: each row is a mapping from column name to
//! cell text. Column names are not prescribed, so every canonical field has an
//! alias list that is tried in order. Matching is case-sensitive as written;
//! the first alias whose trimmed value is non-empty wins.

use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Language used when a row has no language column.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Edition used when a row has no edition column.
pub const DEFAULT_EDITION: &str = "Standard";

// ---------------------------------------------------------------------------
// Canonical fields
// ---------------------------------------------------------------------------

/// A field of the canonical volume schema that import rows map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Title,
    VolumeNumber,
    Author,
    Isbn,
    Language,
    Edition,
}

impl CanonicalField {
    /// Column names tried for this field, in priority order.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Title => &["Title", "title"],
            Self::VolumeNumber => &["Volume", "volume_number", "volume"],
            Self::Author => &["Author", "author"],
            Self::Isbn => &["ISBN", "isbn"],
            Self::Language => &["Language", "language"],
            Self::Edition => &["Edition", "edition_type"],
        }
    }
}

// ---------------------------------------------------------------------------
// ImportRow
// ---------------------------------------------------------------------------

/// One loosely-typed input row. Keys keep their original spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportRow(BTreeMap<String, String>);

impl ImportRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walk the alias list of `field`; first present, non-empty value wins.
    #[must_use]
    pub fn field(&self, field: CanonicalField) -> Option<&str> {
        field
            .aliases()
            .iter()
            .filter_map(|alias| self.get(alias))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Resolve every canonical field, applying language/edition defaults.
    #[must_use]
    pub fn map_fields(&self) -> MappedRow {
        MappedRow {
            title: self.field(CanonicalField::Title).map(String::from),
            volume_number: self.field(CanonicalField::VolumeNumber).map(String::from),
            author: self.field(CanonicalField::Author).map(String::from),
            isbn: self.field(CanonicalField::Isbn).map(String::from),
            language: self
                .field(CanonicalField::Language)
                .unwrap_or(DEFAULT_LANGUAGE)
                .to_string(),
            edition: self
                .field(CanonicalField::Edition)
                .unwrap_or(DEFAULT_EDITION)
                .to_string(),
        }
    }

    /// Compact JSON rendering of the raw row, used in failure messages.
    #[must_use]
    pub fn describe(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| format!("{:?}", self.0))
    }

    /// Build a row from a JSON object. Strings, numbers and booleans are kept
    /// as text; nulls, arrays and nested objects are dropped.
    #[must_use]
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let cells = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key.clone(), text))
            })
            .collect();
        Self(cells)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ImportRow {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A row after alias resolution. Required fields stay optional here so the
/// reconciler can report exactly which rows are incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRow {
    pub title: Option<String>,
    pub volume_number: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub language: String,
    pub edition: String,
}

impl MappedRow {
    /// Title and volume number, or `None` when either is missing.
    #[must_use]
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        Some((self.title.as_deref()?, self.volume_number.as_deref()?))
    }
}

// ---------------------------------------------------------------------------
// Input sources
// ---------------------------------------------------------------------------

/// Parse a JSON array of objects into rows. Non-object elements are rejected.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the document is not a JSON array of objects.
pub fn rows_from_json(text: &str) -> Result<Vec<ImportRow>, CoreError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CoreError::Validation(format!("invalid JSON import file: {e}")))?;
    let serde_json::Value::Array(items) = value else {
        return Err(CoreError::Validation(
            "JSON import file must contain an array of objects".into(),
        ));
    };
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_object()
                .map(ImportRow::from_json_object)
                .ok_or_else(|| {
                    CoreError::Validation(format!("JSON import element {idx} is not an object"))
                })
        })
        .collect()
}

/// Parse header-keyed CSV into rows. Blank lines are skipped; short records
/// simply lack the trailing columns.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the CSV cannot be read.
pub fn rows_from_csv<R: Read>(reader: R) -> Result<Vec<ImportRow>, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::Validation(format!("invalid CSV header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| CoreError::Validation(format!("invalid CSV record: {e}")))?;
        let row: ImportRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}
