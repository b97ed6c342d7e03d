//! Crawl coordinator - the fetch → clean → complete state machine
//!
//! A deliberately direct three-phase pipeline: an internal loop drives the
//! fetch phase until the frontier empties or the page budget is spent, the
//! clean phase runs exactly once per fetched page, and the finished result
//! is handed back to the caller. Per-URL fetch failures are recorded and
//! recovered; anything else propagates and aborts the crawl.

use crate::cleaner::Cleaner;
use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::state::{CrawlResult, CrawlStatus, FetchFailure};
use crate::url::canonicalize_seed;
use crate::SiftError;
use reqwest::Client;

/// Drives a single crawl from seed to finished [`CrawlResult`]
///
/// The coordinator exclusively owns the frontier and visited set while
/// fetching; the accumulated pages are only touched again by the clean
/// phase. Construction validates the seed URL, so a crawl that cannot run
/// at all fails before any state exists.
pub struct Coordinator {
    client: Client,
    cleaner: Cleaner,
    frontier: Frontier,
    result: CrawlResult,
}

impl Coordinator {
    /// Creates a coordinator for the configured crawl
    ///
    /// Fails fast on a malformed seed URL or an HTTP client that cannot be
    /// constructed; no crawl state is produced in either case.
    pub fn new(config: &Config) -> Result<Self, SiftError> {
        let seed = canonicalize_seed(&config.crawler.seed_url).map_err(|message| {
            SiftError::InvalidSeed {
                url: config.crawler.seed_url.clone(),
                message,
            }
        })?;

        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            client,
            cleaner: Cleaner::new(),
            frontier: Frontier::new(seed.clone()),
            result: CrawlResult::new(seed, config.crawler.max_depth, config.crawler.max_pages),
        })
    }

    /// Runs the crawl to completion
    ///
    /// Phases advance linearly: `fetching` → `cleaning` → `complete`. The
    /// returned result is final; nothing mutates it afterwards.
    pub async fn run(mut self) -> Result<CrawlResult, SiftError> {
        let started = std::time::Instant::now();
        tracing::info!(
            "Starting crawl: {} (max_depth={}, max_pages={})",
            self.result.seed_url,
            self.result.max_depth,
            self.result.max_pages
        );

        self.result.status = CrawlStatus::Fetching;
        self.fetch_phase().await;

        self.result.status = CrawlStatus::Cleaning;
        self.clean_phase();

        let Coordinator {
            frontier,
            mut result,
            ..
        } = self;
        result.visited_urls = frontier.into_visited();
        result.status = CrawlStatus::Complete;

        tracing::info!(
            "Crawl completed: {} pages, {} errors in {:?}",
            result.total_crawled,
            result.errors.len(),
            started.elapsed()
        );

        Ok(result)
    }

    /// Fetch loop: breadth-first until the frontier empties or the budget
    /// is spent
    async fn fetch_phase(&mut self) {
        while self.result.total_crawled < self.result.max_pages {
            let Some(entry) = self.frontier.pop() else {
                tracing::info!("Frontier is empty, fetch phase done");
                break;
            };

            // A URL can sit in the queue more than once; only the first pop
            // counts, and skips never touch the page budget.
            if self.frontier.is_visited(&entry.url) {
                continue;
            }

            // Depth filtering happens at pop time: over-depth entries that
            // were already queued are dropped here.
            if entry.depth > self.result.max_depth {
                tracing::debug!("Dropping {} (depth {})", entry.url, entry.depth);
                continue;
            }

            // Marked before the fetch so that a failure still pins the URL.
            self.frontier.mark_visited(entry.url.clone());

            tracing::info!("Fetching: {} (depth {})", entry.url, entry.depth);
            match fetch_page(&self.client, &entry.url).await {
                Ok(page) => {
                    // A redirect can land on a document the frontier knows
                    // under a different name; pinning the final URL keeps a
                    // later direct link from fetching it again.
                    self.frontier.mark_visited(page.url.clone());

                    if entry.depth < self.result.max_depth {
                        for link in &page.links {
                            if !self.frontier.is_visited(link) {
                                self.frontier.enqueue(link.clone(), entry.depth + 1);
                            }
                        }
                    }

                    self.result.total_crawled += 1;
                    self.result.pages.push(page);
                }
                Err(error) => {
                    tracing::warn!("Fetch failed: {}", error);
                    self.result.errors.push(FetchFailure {
                        url: entry.url,
                        message: error.to_string(),
                    });
                }
            }
        }

        if self.result.total_crawled >= self.result.max_pages && !self.frontier.is_empty() {
            tracing::info!(
                "Page limit reached, discarding {} queued URLs",
                self.frontier.len()
            );
        }
    }

    /// Clean phase: fills `cleaned_text` and merges extracted metadata,
    /// exactly once per page
    fn clean_phase(&mut self) {
        for page in &mut self.result.pages {
            if page.cleaned_text.is_some() {
                continue;
            }

            let cleaned = self.cleaner.clean(&page.raw_html);
            let extracted = self.cleaner.extract_metadata(&page.raw_html);

            // Freshly extracted keys overwrite whatever the fetcher stored.
            page.metadata.extend(extracted);
            page.set_cleaned_text(cleaned);

            tracing::info!("Cleaned content for: {}", page.url);
        }
    }
}
