//! # tbn-metadata
//!
//! External catalog lookups for Tankobon, behind one [`MetadataLookup`] trait:
//! - Google Books, keyed by ISBN (form prefill and barcode capture)
//! - AniList, keyed by title (series enrichment)
//!
//! Both paths return a normalized partial record or `Ok(None)` for "not
//! found". Callers treat errors and misses identically: no enrichment.

pub mod anilist;
pub mod google_books;

mod error;
mod http;

pub use error::MetadataError;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// Normalized result of an ISBN lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnMetadata {
    pub title: String,
    /// First listed author, empty when the catalog has none.
    pub author: String,
    pub description: String,
    pub thumbnail: Option<String>,
}

/// Title spellings reported by a title catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleVariants {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// Cover image URLs at the sizes a title catalog offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

impl CoverImage {
    /// The biggest available cover.
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        self.extra_large.as_deref().or(self.large.as_deref())
    }
}

/// Normalized result of a title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleMetadata {
    pub external_id: i64,
    pub titles: TitleVariants,
    pub description: Option<String>,
    pub cover_image: CoverImage,
    pub site_url: Option<String>,
}

// ── Lookup seam ────────────────────────────────────────────────────

/// Pluggable external catalog. `Ok(None)` means "no match".
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Look up a book by ISBN. The input is cleaned before querying.
    async fn lookup_isbn(&self, isbn: &str) -> Result<Option<IsbnMetadata>, MetadataError>;

    /// Look up a manga series by free-text title.
    async fn lookup_title(&self, title: &str) -> Result<Option<TitleMetadata>, MetadataError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Endpoints queried by [`MetadataClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub google_books_url: String,
    pub anilist_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            google_books_url: "https://www.googleapis.com/books/v1/volumes".to_string(),
            anilist_url: "https://graphql.anilist.co".to_string(),
        }
    }
}

/// HTTP client for the Google Books and AniList catalogs.
pub struct MetadataClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl MetadataClient {
    /// Create a client with the given endpoints, timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g. TLS backend initialization).
    pub fn new(
        endpoints: Endpoints,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, MetadataError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, endpoints })
    }

    /// Client against the public catalogs with a 10 s timeout.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_defaults() -> Result<Self, MetadataError> {
        Self::new(Endpoints::default(), Duration::from_secs(10), "tankobon/0.1")
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait]
impl MetadataLookup for MetadataClient {
    async fn lookup_isbn(&self, isbn: &str) -> Result<Option<IsbnMetadata>, MetadataError> {
        self.search_google_books(isbn).await
    }

    async fn lookup_title(&self, title: &str) -> Result<Option<TitleMetadata>, MetadataError> {
        self.search_anilist(title).await
    }
}
