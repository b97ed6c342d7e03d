//! HTTP fetcher
//!
//! One GET per page: redirects are followed and the final resolved URL is
//! what the rest of the pipeline sees, which is what keeps de-duplication
//! honest when two requested URLs land on the same document. Every request
//! is preceded by a fixed politeness pause.

use crate::config::UserAgentConfig;
use crate::crawler::parser::parse_html;
use crate::state::PageRecord;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Fixed per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed pause applied before every outbound request
pub const POLITENESS_DELAY: Duration = Duration::from_millis(500);

/// Maximum redirect hops before a fetch is abandoned
const MAX_REDIRECTS: usize = 10;

/// A recoverable, per-URL fetch failure
///
/// Never retried: the orchestrator records exactly one error per failed URL
/// and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out for {url}")]
    Timeout { url: Url },

    #[error("network error for {url}: {message}")]
    Network { url: Url, message: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: Url, status: u16 },
}

impl FetchError {
    /// The URL the failure belongs to
    pub fn url(&self) -> &Url {
        match self {
            FetchError::Timeout { url } => url,
            FetchError::Network { url, .. } => url,
            FetchError::Status { url, .. } => url,
        }
    }
}

/// Builds the HTTP client shared across the whole crawl
///
/// The user agent string is formatted `Name/Version (+ContactURL; Email)`
/// so site operators can identify and reach the crawler's owner.
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and extracts its content
///
/// Sleeps the politeness delay, issues one GET, and on a successful terminal
/// status builds a [`PageRecord`] from the response: final post-redirect URL
/// (fragment stripped), title, canonical de-duplicated links, and the HTTP
/// metadata triplet (status, content type, byte length).
///
/// The body is parsed as HTML regardless of the declared content type;
/// unparseable bodies degrade to an empty link list and no title. Network
/// errors, timeouts, and non-2xx/3xx terminal statuses come back as a typed
/// [`FetchError`] and are never retried here.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<PageRecord, FetchError> {
    tokio::time::sleep(POLITENESS_DELAY).await;

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(FetchError::Status {
            url: url.clone(),
            status: status.as_u16(),
        });
    }

    let mut final_url = response.url().clone();
    final_url.set_fragment(None);

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await.map_err(|e| classify_error(url, e))?;

    let parsed = parse_html(&body, &final_url);

    let mut metadata = BTreeMap::new();
    metadata.insert(
        "status_code".to_string(),
        serde_json::Value::from(status.as_u16()),
    );
    metadata.insert(
        "content_type".to_string(),
        serde_json::Value::from(content_type),
    );
    metadata.insert(
        "content_length".to_string(),
        serde_json::Value::from(body.len()),
    );

    Ok(PageRecord {
        url: final_url,
        title: parsed.title,
        raw_html: body,
        cleaned_text: None,
        links: parsed.links,
        metadata,
        fetched_at: Utc::now(),
    })
}

/// Maps a reqwest error onto the fetch failure taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout { url: url.clone() }
    } else {
        FetchError::Network {
            url: url.clone(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&create_test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetch_error_carries_url() {
        let url = Url::parse("https://example.com/missing").unwrap();
        let error = FetchError::Status {
            url: url.clone(),
            status: 404,
        };
        assert_eq!(error.url(), &url);
        assert!(error.to_string().contains("404"));
        assert!(error.to_string().contains("example.com/missing"));
    }

    // Live fetch behavior (redirects, statuses, timeouts) is covered by the
    // wiremock end-to-end tests in tests/crawl_tests.rs.
}
