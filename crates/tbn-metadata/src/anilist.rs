//! AniList GraphQL client (title path).

use crate::{
    CoverImage, MetadataClient, TitleMetadata, TitleVariants, error::MetadataError,
    http::check_response,
};

const MEDIA_QUERY: &str = r"
query ($search: String) {
  Media (search: $search, type: MANGA) {
    id
    title {
      romaji
      english
      native
    }
    coverImage {
      large
      extraLarge
    }
    description
    siteUrl
  }
}
";

#[derive(serde::Deserialize)]
struct GraphQlResponse {
    data: Option<MediaData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(serde::Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MediaData {
    media: Option<Media>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Media {
    id: i64,
    title: Option<MediaTitle>,
    cover_image: Option<MediaCover>,
    description: Option<String>,
    site_url: Option<String>,
}

#[derive(serde::Deserialize)]
struct MediaTitle {
    romaji: Option<String>,
    english: Option<String>,
    native: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaCover {
    large: Option<String>,
    extra_large: Option<String>,
}

fn to_metadata(resp: GraphQlResponse) -> Result<Option<TitleMetadata>, MetadataError> {
    if !resp.errors.is_empty() {
        let message = resp
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(MetadataError::Parse(format!("AniList errors: {message}")));
    }

    let Some(media) = resp.data.and_then(|d| d.media) else {
        return Ok(None);
    };
    Ok(Some(TitleMetadata {
        external_id: media.id,
        titles: media
            .title
            .map(|t| TitleVariants {
                romaji: t.romaji,
                english: t.english,
                native: t.native,
            })
            .unwrap_or_default(),
        description: media.description,
        cover_image: media
            .cover_image
            .map(|c| CoverImage {
                large: c.large,
                extra_large: c.extra_large,
            })
            .unwrap_or_default(),
        site_url: media.site_url,
    }))
}

impl MetadataClient {
    /// Search AniList for the best manga match of `title`.
    ///
    /// AniList answers an unmatched search with HTTP 404; that is mapped to
    /// `Ok(None)` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the HTTP request fails, AniList returns a
    /// non-success status other than 404, or the payload carries GraphQL errors.
    pub async fn search_anilist(
        &self,
        title: &str,
    ) -> Result<Option<TitleMetadata>, MetadataError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let body = serde_json::json!({
            "query": MEDIA_QUERY,
            "variables": { "search": title },
        });
        let resp = self
            .http
            .post(&self.endpoints.anilist_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;
        if resp.status() == 404 {
            tracing::debug!(title, "anilist has no match");
            return Ok(None);
        }

        let resp = check_response(resp, "anilist").await?;
        let data: GraphQlResponse = resp.json().await?;
        let found = to_metadata(data)?;
        tracing::debug!(title, found = found.is_some(), "anilist lookup");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "data": {
            "Media": {
                "id": 30011,
                "title": {
                    "romaji": "NARUTO",
                    "english": "Naruto",
                    "native": "NARUTO -ナルト-"
                },
                "coverImage": {
                    "large": "https://s4.anilist.co/cover/medium.jpg",
                    "extraLarge": "https://s4.anilist.co/cover/large.jpg"
                },
                "description": "Before Naruto's birth, a great demon fox had attacked...",
                "siteUrl": "https://anilist.co/manga/30011"
            }
        }
    }"#;

    #[test]
    fn parse_media_response() {
        let data: GraphQlResponse = serde_json::from_str(FIXTURE).unwrap();
        let meta = to_metadata(data).unwrap().unwrap();
        assert_eq!(meta.external_id, 30011);
        assert_eq!(meta.titles.english.as_deref(), Some("Naruto"));
        assert_eq!(meta.titles.romaji.as_deref(), Some("NARUTO"));
        assert_eq!(
            meta.cover_image.best(),
            Some("https://s4.anilist.co/cover/large.jpg")
        );
        assert_eq!(meta.site_url.as_deref(), Some("https://anilist.co/manga/30011"));
    }

    #[test]
    fn null_media_is_not_found() {
        let data: GraphQlResponse = serde_json::from_str(r#"{"data": {"Media": null}}"#).unwrap();
        assert!(to_metadata(data).unwrap().is_none());
    }

    #[test]
    fn graphql_errors_are_reported() {
        let data: GraphQlResponse = serde_json::from_str(
            r#"{"data": null, "errors": [{"message": "Too Many Requests.", "status": 429}]}"#,
        )
        .unwrap();
        let err = to_metadata(data).unwrap_err();
        assert!(matches!(err, MetadataError::Parse(msg) if msg.contains("Too Many Requests")));
    }

    #[test]
    fn query_requests_cover_sizes() {
        assert!(MEDIA_QUERY.contains("extraLarge"));
        assert!(MEDIA_QUERY.contains("type: MANGA"));
    }
}
