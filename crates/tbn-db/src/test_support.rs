//! Shared test utilities for tbn-db unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tbn_metadata::{
    CoverImage, IsbnMetadata, MetadataError, MetadataLookup, TitleMetadata, TitleVariants,
};

use crate::TbnDb;
use crate::repos::volume::NewVolume;
use crate::service::LibraryService;

pub const OWNER: &str = "user-1";
pub const OTHER_OWNER: &str = "user-2";

/// Scriptable in-memory catalog.
#[derive(Default)]
pub struct FakeLookup {
    titles: HashMap<String, TitleMetadata>,
    isbns: HashMap<String, IsbnMetadata>,
    fail: bool,
    title_calls: AtomicUsize,
}

impl FakeLookup {
    pub fn with_title(mut self, title: &str, meta: TitleMetadata) -> Self {
        self.titles.insert(title.to_string(), meta);
        self
    }

    pub fn with_isbn(mut self, isbn: &str, meta: IsbnMetadata) -> Self {
        self.isbns.insert(isbn.to_string(), meta);
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn title_calls(&self) -> usize {
        self.title_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataLookup for FakeLookup {
    async fn lookup_isbn(&self, isbn: &str) -> Result<Option<IsbnMetadata>, MetadataError> {
        if self.fail {
            return Err(MetadataError::Api {
                status: 503,
                message: "unavailable".into(),
            });
        }
        Ok(self.isbns.get(isbn).cloned())
    }

    async fn lookup_title(&self, title: &str) -> Result<Option<TitleMetadata>, MetadataError> {
        self.title_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(MetadataError::RateLimited {
                retry_after_secs: 60,
            });
        }
        Ok(self.titles.get(title).cloned())
    }
}

/// AniList-shaped match for `title`.
pub fn title_match(id: i64, title: &str) -> TitleMetadata {
    TitleMetadata {
        external_id: id,
        titles: TitleVariants {
            romaji: Some(title.to_string()),
            english: Some(title.to_string()),
            native: None,
        },
        description: Some(format!("About {title}.")),
        cover_image: CoverImage {
            large: Some(format!("https://img.example/{id}/l.jpg")),
            extra_large: Some(format!("https://img.example/{id}/xl.jpg")),
        },
        site_url: None,
    }
}

/// In-memory service with lookups disabled.
pub async fn test_service() -> LibraryService {
    let db = TbnDb::open_local(":memory:").await.unwrap();
    LibraryService::from_db(db, None)
}

/// In-memory service backed by `lookup`; the `Arc` is returned for call assertions.
pub async fn test_service_with(lookup: FakeLookup) -> (LibraryService, Arc<FakeLookup>) {
    let lookup = Arc::new(lookup);
    let db = TbnDb::open_local(":memory:").await.unwrap();
    let shared: Arc<dyn MetadataLookup> = lookup.clone();
    let svc = LibraryService::from_db(db, Some(shared));
    (svc, lookup)
}

/// Add a plain volume for `OWNER` and return its id.
pub async fn add_test_volume(svc: &LibraryService, title: &str, number: &str) -> String {
    add_volume_for(svc, OWNER, title, number).await
}

pub async fn add_volume_for(
    svc: &LibraryService,
    owner_id: &str,
    title: &str,
    number: &str,
) -> String {
    svc.add_volume(owner_id, &NewVolume::new(title, number))
        .await
        .unwrap()
        .volume
        .id
}
