//! Crawler module: fetching, parsing, frontier management, coordination
//!
//! The pieces compose in one direction: the coordinator pops the frontier,
//! the fetcher retrieves and parses a page, and the links it found feed the
//! frontier back at depth + 1.

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchError, POLITENESS_DELAY, REQUEST_TIMEOUT};
pub use frontier::Frontier;
pub use parser::{parse_html, ParsedPage};

use crate::config::Config;
use crate::state::CrawlResult;
use crate::SiftError;

/// Runs a complete crawl for the given configuration
///
/// This is the main library entry point: it validates the seed, drives the
/// fetch and clean phases, and returns the finished [`CrawlResult`] ready
/// for export.
pub async fn crawl(config: &Config) -> Result<CrawlResult, SiftError> {
    Coordinator::new(config)?.run().await
}
