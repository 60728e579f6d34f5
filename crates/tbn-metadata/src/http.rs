//! Response status handling shared by the catalog clients.

use reqwest::StatusCode;

use crate::error::MetadataError;

/// Seconds to back off when a catalog throttles without saying for how long.
const DEFAULT_BACKOFF_SECS: u64 = 60;

/// Longest error body kept in [`MetadataError::Api`] messages.
const MAX_ERROR_BODY: usize = 200;

/// Pass successful responses through; turn throttling and other failures
/// into typed errors tagged with the catalog name.
pub async fn check_response(
    resp: reqwest::Response,
    catalog: &'static str,
) -> Result<reqwest::Response, MetadataError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after(&resp);
        tracing::warn!(catalog, retry_after_secs, "catalog rate limited");
        return Err(MetadataError::RateLimited { retry_after_secs });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let body: String = body.chars().take(MAX_ERROR_BODY).collect();
    Err(MetadataError::Api {
        status: status.as_u16(),
        message: format!("{catalog}: {}", body.trim()),
    })
}

fn retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_BACKOFF_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, retry_after: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = ::http::Response::builder().status(status);
        if let Some(value) = retry_after {
            builder = builder.header("Retry-After", value);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn throttling_uses_header_seconds() {
        let err = check_response(response(429, Some("30"), ""), "anilist")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn throttling_without_header_backs_off_a_minute() {
        let err = check_response(response(429, None, ""), "anilist")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MetadataError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn server_errors_name_the_catalog() {
        let err = check_response(response(503, None, "down for maintenance"), "google books")
            .await
            .unwrap_err();
        let MetadataError::Api { status, message } = err else {
            panic!("expected api error");
        };
        assert_eq!(status, 503);
        assert_eq!(message, "google books: down for maintenance");
    }

    #[tokio::test]
    async fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let err = check_response(response(500, None, &body), "anilist")
            .await
            .unwrap_err();
        let MetadataError::Api { message, .. } = err else {
            panic!("expected api error");
        };
        assert!(message.len() <= "anilist: ".len() + MAX_ERROR_BODY);
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(response(200, None, "{}"), "anilist").await.is_ok());
    }
}
