//! Google Books client (ISBN path).

use tbn_core::isbn::clean_isbn;

use crate::{IsbnMetadata, MetadataClient, error::MetadataError, http::check_response};

#[derive(serde::Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<VolumeItem>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeItem {
    volume_info: VolumeInfo,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    description: Option<String>,
    image_links: Option<ImageLinks>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

fn to_metadata(data: VolumesResponse) -> Option<IsbnMetadata> {
    let info = data.items.into_iter().next()?.volume_info;
    Some(IsbnMetadata {
        title: info.title.unwrap_or_default(),
        author: info.authors.into_iter().next().unwrap_or_default(),
        description: info.description.unwrap_or_default(),
        thumbnail: info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail)),
    })
}

impl MetadataClient {
    /// Look up the first Google Books volume matching `isbn`.
    ///
    /// The ISBN is cleaned to digits and `X` first; an input that cleans to
    /// nothing is a miss without any request.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the HTTP request fails, the catalog
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn search_google_books(
        &self,
        isbn: &str,
    ) -> Result<Option<IsbnMetadata>, MetadataError> {
        let clean = clean_isbn(isbn);
        if clean.is_empty() {
            return Ok(None);
        }

        let url = format!(
            "{}?q=isbn:{}",
            self.endpoints.google_books_url,
            urlencoding::encode(&clean)
        );
        let resp = check_response(self.http.get(&url).send().await?, "google books").await?;
        let data: VolumesResponse = resp.json().await?;
        let found = to_metadata(data);
        tracing::debug!(isbn = %clean, found = found.is_some(), "google books lookup");
        Ok(found)
    }
}
