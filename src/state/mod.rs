//! Crawl data model
//!
//! The types here accumulate through the crawl's three phases. The
//! orchestrator owns the frontier and visited set while fetching; once a
//! [`PageRecord`] lands in the [`CrawlResult`] it is only touched again by
//! the cleaner, which fills `cleaned_text` exactly once.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use url::Url;

/// A single fetched page with its extracted content
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// Canonical URL in its final, post-redirect form
    pub url: Url,

    /// Page title from the first <title> element, if any
    pub title: Option<String>,

    /// Original markup as fetched; kept for the clean phase, never exported
    #[serde(skip)]
    pub raw_html: String,

    /// Cleaned text body, populated exactly once by the cleaner
    pub cleaned_text: Option<String>,

    /// Canonical outbound links, duplicates removed, first-seen order
    pub links: Vec<Url>,

    /// HTTP status, content type, byte length, plus extracted meta tags
    pub metadata: BTreeMap<String, serde_json::Value>,

    /// When the fetch completed
    pub fetched_at: DateTime<Utc>,
}

impl PageRecord {
    /// Sets the cleaned text if it has not been set yet
    ///
    /// Returns whether the value was stored; a record is never re-cleaned.
    pub fn set_cleaned_text(&mut self, text: String) -> bool {
        if self.cleaned_text.is_some() {
            return false;
        }
        self.cleaned_text = Some(text);
        true
    }
}

/// A URL queued for fetching together with its link-distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub url: Url,
    pub depth: u32,
}

impl FrontierEntry {
    pub fn new(url: Url, depth: u32) -> Self {
        Self { url, depth }
    }
}

/// A recoverable per-URL fetch failure
#[derive(Debug, Clone, Serialize)]
pub struct FetchFailure {
    /// The URL that failed
    pub url: Url,

    /// Human-readable failure description
    pub message: String,
}

/// Phase of the crawl pipeline
///
/// Transitions are strictly linear: `Initialized` → `Fetching` → `Cleaning`
/// → `Complete`. There are no backward transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    Initialized,
    Fetching,
    Cleaning,
    Complete,
}

impl std::fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CrawlStatus::Initialized => "initialized",
            CrawlStatus::Fetching => "fetching",
            CrawlStatus::Cleaning => "cleaning",
            CrawlStatus::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Aggregate result of a crawl
///
/// Accumulates through the fetch and clean phases and is handed to exporters
/// once `status` reaches [`CrawlStatus::Complete`]; nothing mutates it after
/// that point.
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// The canonical seed URL the crawl started from
    pub seed_url: Url,

    /// Maximum link depth; the seed is depth 0
    pub max_depth: u32,

    /// Maximum number of successfully fetched pages
    pub max_pages: usize,

    /// Fetched pages in fetch order
    pub pages: Vec<PageRecord>,

    /// Every URL that was handed to the fetcher (successes and failures)
    ///
    /// A set in memory; exporters convert to a sorted list at the
    /// serialization boundary.
    pub visited_urls: HashSet<Url>,

    /// Per-URL fetch failures in the order they occurred
    pub errors: Vec<FetchFailure>,

    /// Current pipeline phase
    pub status: CrawlStatus,

    /// Number of successfully fetched pages; always equals `pages.len()`
    pub total_crawled: usize,
}

impl CrawlResult {
    /// Creates an empty result for a crawl about to start
    pub fn new(seed_url: Url, max_depth: u32, max_pages: usize) -> Self {
        Self {
            seed_url,
            max_depth,
            max_pages,
            pages: Vec::new(),
            visited_urls: HashSet::new(),
            errors: Vec::new(),
            status: CrawlStatus::Initialized,
            total_crawled: 0,
        }
    }

    /// Total number of outbound links across all fetched pages
    pub fn total_links(&self) -> usize {
        self.pages.iter().map(|p| p.links.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn test_record() -> PageRecord {
        PageRecord {
            url: test_url("https://example.com/"),
            title: Some("Example".to_string()),
            raw_html: "<html></html>".to_string(),
            cleaned_text: None,
            links: vec![],
            metadata: BTreeMap::new(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_cleaned_text_set_once() {
        let mut record = test_record();
        assert!(record.set_cleaned_text("first".to_string()));
        assert!(!record.set_cleaned_text("second".to_string()));
        assert_eq!(record.cleaned_text.as_deref(), Some("first"));
    }

    #[test]
    fn test_new_result_is_initialized() {
        let result = CrawlResult::new(test_url("https://example.com/"), 2, 10);
        assert_eq!(result.status, CrawlStatus::Initialized);
        assert_eq!(result.total_crawled, 0);
        assert!(result.pages.is_empty());
        assert!(result.visited_urls.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_total_links() {
        let mut result = CrawlResult::new(test_url("https://example.com/"), 2, 10);
        let mut record = test_record();
        record.links = vec![
            test_url("https://example.com/a"),
            test_url("https://example.com/b"),
        ];
        result.pages.push(record);
        result.pages.push(test_record());
        assert_eq!(result.total_links(), 2);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CrawlStatus::Fetching.to_string(), "fetching");
        assert_eq!(CrawlStatus::Complete.to_string(), "complete");
    }
}
