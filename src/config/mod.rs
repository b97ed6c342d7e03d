//! Configuration loading and validation
//!
//! TOML configuration with three sections: `[crawler]` for the seed and
//! crawl bounds, `[user-agent]` for the crawler's identity, and `[export]`
//! for output rendering. Validation runs at load time so a config that
//! cannot drive a crawl never reaches the coordinator.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, ExportConfig, ExportFormat, UserAgentConfig};
pub use validation::validate;
