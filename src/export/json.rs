//! JSON export

use crate::export::ExportResult;
use crate::state::{CrawlResult, PageRecord};
use chrono::Utc;
use serde_json::{json, Value};
use std::path::Path;
use url::Url;

/// Renders a finished crawl as a JSON document
///
/// Raw markup is omitted; each page carries its cleaned text, metadata, and
/// a link count. The visited set is emitted as a sorted list so output is
/// stable across runs with the same coverage.
pub fn render_json(result: &CrawlResult) -> Value {
    let mut visited: Vec<&str> = result.visited_urls.iter().map(Url::as_str).collect();
    visited.sort_unstable();

    json!({
        "metadata": {
            "seed_url": result.seed_url.as_str(),
            "max_depth": result.max_depth,
            "max_pages": result.max_pages,
            "total_crawled": result.total_crawled,
            "total_errors": result.errors.len(),
            "status": result.status,
            "export_date": Utc::now().to_rfc3339(),
        },
        "pages": result.pages.iter().map(render_page).collect::<Vec<Value>>(),
        "visited_urls": visited,
        "errors": result
            .errors
            .iter()
            .map(|e| json!({ "url": e.url.as_str(), "message": e.message }))
            .collect::<Vec<Value>>(),
    })
}

fn render_page(page: &PageRecord) -> Value {
    json!({
        "url": page.url.as_str(),
        "title": page.title,
        "cleaned_text": page.cleaned_text,
        "metadata": page.metadata,
        "fetched_at": page.fetched_at.to_rfc3339(),
        "links_count": page.links.len(),
    })
}

/// Writes the JSON rendering to a file
pub fn export_json(result: &CrawlResult, path: &Path) -> ExportResult<()> {
    let document = render_json(result);
    let pretty = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, pretty)?;
    Ok(())
}
