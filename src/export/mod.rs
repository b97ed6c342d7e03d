//! Export renderings of a finished crawl
//!
//! Exporters are pure projections over [`CrawlResult`](crate::CrawlResult):
//! they read a completed crawl and write a file, imposing nothing back on
//! the core. The visited set becomes a sorted list here and only here.

mod json;
mod markdown;

pub use json::{export_json, render_json};
pub use markdown::{export_markdown, render_markdown};

use crate::config::{ExportConfig, ExportFormat};
use crate::state::CrawlResult;
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Generates a unique, timestamped export filename
pub fn timestamped_filename(prefix: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

/// Writes every enabled rendering into the configured directory
///
/// The directory is created on demand. Returns the paths written, in the
/// order the formats were configured.
pub fn export_all(result: &CrawlResult, config: &ExportConfig) -> ExportResult<Vec<PathBuf>> {
    let directory = Path::new(&config.directory);
    std::fs::create_dir_all(directory)?;

    let mut written = Vec::new();
    for format in &config.formats {
        let path = match format {
            ExportFormat::Json => {
                let path = directory.join(timestamped_filename("crawl_results", "json"));
                export_json(result, &path)?;
                path
            }
            ExportFormat::Markdown => {
                let path = directory.join(timestamped_filename("crawl_results", "md"));
                export_markdown(result, &path)?;
                path
            }
        };
        tracing::info!("Exported {}", path.display());
        written.push(path);
    }

    Ok(written)
}
