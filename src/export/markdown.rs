//! Markdown report generation

use crate::export::ExportResult;
use crate::state::CrawlResult;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// How many content paragraphs each page section shows before truncating
const PARAGRAPH_LIMIT: usize = 10;

/// Renders a finished crawl as a human-readable markdown report
pub fn render_markdown(result: &CrawlResult) -> String {
    let mut md = String::new();

    md.push_str("# Web Crawl Results\n\n");
    md.push_str(&format!("**Seed URL:** {}\n\n", result.seed_url));
    md.push_str(&format!(
        "**Crawl Date:** {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    md.push_str(&format!(
        "**Total Pages Crawled:** {}\n\n",
        result.total_crawled
    ));
    md.push_str(&format!("**Maximum Depth:** {}\n\n", result.max_depth));
    md.push_str("---\n\n");

    for (i, page) in result.pages.iter().enumerate() {
        let title = page.title.as_deref().unwrap_or("Untitled");
        md.push_str(&format!("## Page {}: {}\n\n", i + 1, title));
        md.push_str(&format!("**URL:** [{}]({})\n\n", page.url, page.url));
        md.push_str(&format!(
            "**Fetched At:** {}\n\n",
            page.fetched_at.format("%Y-%m-%d %H:%M:%S")
        ));

        if let Some(description) = page.metadata.get("description").and_then(|v| v.as_str()) {
            md.push_str(&format!("**Description:** {}\n\n", description));
        }

        md.push_str("### Content\n\n");
        match page.cleaned_text.as_deref().filter(|t| !t.is_empty()) {
            Some(text) => {
                let paragraphs: Vec<&str> = text.split("\n\n").collect();
                for paragraph in paragraphs.iter().take(PARAGRAPH_LIMIT) {
                    let paragraph = paragraph.trim();
                    if !paragraph.is_empty() {
                        md.push_str(&format!("{}\n\n", paragraph));
                    }
                }
                if paragraphs.len() > PARAGRAPH_LIMIT {
                    md.push_str(&format!(
                        "*... ({} more paragraphs)*\n\n",
                        paragraphs.len() - PARAGRAPH_LIMIT
                    ));
                }
            }
            None => md.push_str("*No content available*\n\n"),
        }

        md.push_str("---\n\n");
    }

    if !result.errors.is_empty() {
        md.push_str("## Errors\n\n");
        for error in &result.errors {
            md.push_str(&format!("- **{}**: {}\n", error.url, error.message));
        }
    }

    md
}

/// Writes the markdown rendering to a file
pub fn export_markdown(result: &CrawlResult, path: &Path) -> ExportResult<()> {
    let markdown = render_markdown(result);

    let mut file = File::create(path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}
