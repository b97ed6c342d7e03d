//! Pagesift: a bounded site crawler with content cleaning
//!
//! This crate crawls a website breadth-first from a seed URL, bounded by a
//! maximum link depth and page count, and produces a de-duplicated record of
//! cleaned page text and extracted links ready for export.

pub mod cleaner;
pub mod config;
pub mod crawler;
pub mod export;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Pagesift operations
///
/// Per-URL fetch failures are deliberately NOT represented here; those are
/// recorded on the [`state::CrawlResult`] and the crawl continues. Anything
/// that surfaces as a `SiftError` aborts the whole crawl.
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL '{url}': {message}")]
    InvalidSeed { url: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Pagesift operations
pub type Result<T> = std::result::Result<T, SiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::cleaner::Cleaner;
pub use crate::config::Config;
pub use crate::crawler::{crawl, FetchError};
pub use crate::state::{CrawlResult, CrawlStatus, FetchFailure, PageRecord};
pub use crate::url::normalize_href;
