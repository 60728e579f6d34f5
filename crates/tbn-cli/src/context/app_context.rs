use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tbn_config::{MetadataConfig, TankobonConfig};
use tbn_db::service::LibraryService;
use tbn_metadata::{Endpoints, MetadataClient, MetadataLookup};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LibraryService,
    pub config: TankobonConfig,
    pub owner_id: String,
}

impl AppContext {
    /// Open the library database and wire up the metadata client.
    pub async fn init(config: TankobonConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory()
            && let Some(parent) = Path::new(&config.database.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let metadata = build_metadata(&config.metadata);
        let service = LibraryService::new_local(&config.database.path, metadata)
            .await
            .context("failed to open library database")?;
        tracing::debug!(path = %config.database.path, enrich = service.has_metadata(), "library opened");

        let owner_id = config.general.owner_id.trim().to_string();
        Ok(Self {
            service,
            config,
            owner_id,
        })
    }
}

/// Build the catalog client, or `None` when lookups are off. A client that
/// fails to build disables lookups instead of aborting startup.
fn build_metadata(config: &MetadataConfig) -> Option<Arc<dyn MetadataLookup>> {
    if !config.is_configured() {
        return None;
    }
    let endpoints = Endpoints {
        google_books_url: config.google_books_url.clone(),
        anilist_url: config.anilist_url.clone(),
    };
    match MetadataClient::new(
        endpoints,
        Duration::from_secs(config.timeout_secs),
        &config.user_agent,
    ) {
        Ok(client) => Some(Arc::new(client)),
        Err(error) => {
            tracing::warn!(%error, "metadata client unavailable; lookups disabled");
            None
        }
    }
}
