use serde::Deserialize;

/// Main configuration structure for Pagesift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub export: ExportConfig,
}

/// Crawl bounds and starting point
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Absolute HTTP/HTTPS URL the crawl starts from
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// Maximum link depth; 0 fetches only the seed page
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Maximum number of successfully fetched pages
    #[serde(rename = "max-pages")]
    pub max_pages: usize,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written into (created on demand)
    pub directory: String,

    /// Formats to render; defaults to all of them
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,
}

/// A supported export rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
}

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Json, ExportFormat::Markdown]
}
