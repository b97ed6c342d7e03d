//! Pagesift main entry point
//!
//! Command-line interface: loads a TOML configuration, runs the crawl, and
//! writes the configured exports.

use anyhow::Context;
use clap::Parser;
use pagesift::config::{load_config, Config};
use pagesift::crawler::crawl;
use pagesift::export::export_all;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagesift: a bounded site crawler with content cleaning
///
/// Crawls a website breadth-first from a configured seed URL, cleans every
/// fetched page down to its readable text, and exports the results as JSON
/// and/or markdown.
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(version)]
#[command(about = "A bounded site crawler with content cleaning", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagesift=info,warn"),
            1 => EnvFilter::new("pagesift=debug,info"),
            2 => EnvFilter::new("pagesift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Pagesift Dry Run ===\n");

    println!("Crawl:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max pages: {}", config.crawler.max_pages);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nExport:");
    println!("  Directory: {}", config.export.directory);
    println!("  Formats: {:?}", config.export.formats);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation and export
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    let result = crawl(config).await.context("crawl failed")?;

    println!(
        "Crawled {} pages ({} links, {} errors) from {}",
        result.total_crawled,
        result.total_links(),
        result.errors.len(),
        result.seed_url
    );

    let written = export_all(&result, &config.export).context("export failed")?;
    for path in written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
