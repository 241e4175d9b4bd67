// src/fetch.rs
// =============================================================================
// Document Fetcher: retrieves the page under analysis.
//
// One GET, no retries. Only an exact 200 counts as success; any other status
// and any transport failure is reported to the caller as an AnalysisError.
//
// Rust concepts:
// - async/await: the request and the body read are network I/O
// - map_err: turn reqwest errors into our own error type with context
//
// The body is decoded with the charset announced in Content-Type (UTF-8 when
// there is none). Bytes that don't fit that charset are replaced, never
// rejected, so a mislabelled page still gets analysed.
// =============================================================================

use crate::error::{AnalysisError, Result};
use log::{debug, info};
use reqwest::{Client, StatusCode};

// Fetches a web page and returns its decoded body
//
// The response is consumed (and its connection released) before we return,
// so callers only ever hold a plain String.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| AnalysisError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AnalysisError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(|source| {
        if source.is_decode() {
            AnalysisError::Parse {
                url: url.to_string(),
                reason: source.to_string(),
            }
        } else {
            AnalysisError::Transport {
                url: url.to_string(),
                source,
            }
        }
    })?;

    info!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_ok_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .mount(&server)
            .await;

        let body = fetch_page(&Client::new(), &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_decodes_declared_charset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(b"<title>Caf\xE9</title>".to_vec(), "text/html; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let body = fetch_page(&Client::new(), &server.uri()).await.unwrap();
        assert_eq!(body, "<title>Caf\u{e9}</title>");
    }

    #[tokio::test]
    async fn test_fetch_replaces_bytes_outside_charset() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(vec![b'<', b'p', b'>', 0xff], "text/html"))
            .mount(&server)
            .await;

        let body = fetch_page(&Client::new(), &server.uri()).await.unwrap();
        assert_eq!(body, "<p>\u{fffd}");
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = fetch_page(&Client::new(), &server.uri()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::UnexpectedStatus { status: 204, .. }));
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        // Port 9 (discard) is almost never listening locally
        let err = fetch_page(&Client::new(), "http://127.0.0.1:9/")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Transport { .. }));
    }
}
