//! HTML parsing for titles and outbound links

use crate::url::normalize_href;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Title and links extracted from a page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from the first <title> tag)
    pub title: Option<String>,

    /// Canonical outbound links, duplicates removed, first-seen order
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts the title and outbound links
///
/// Candidate hrefs come from `<a>` and `<link>` elements in document order.
/// Each is normalized against `base_url`; hrefs the normalizer rejects
/// (unsupported schemes, unresolvable references) are silently dropped.
/// Parsing is best-effort: malformed markup yields whatever the recovering
/// parser can see, never an error.
pub fn parse_html(html: &str, base_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document, base_url),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts canonical links, de-duplicated in first-seen order
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href], link[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(url) = normalize_href(base_url, href) {
                    if seen.insert(url.clone()) {
                        links.push(url);
                    }
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.title, Some("Test Page".to_string()));
    }

    #[test]
    fn test_title_whitespace_trimmed() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.title, Some("Test Page".to_string()));
    }

    #[test]
    fn test_no_title() {
        let html = r#"<html><head></head><body></body></html>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.title, None);
    }

    #[test]
    fn test_empty_title_is_none() {
        let html = r#"<html><head><title>   </title></head><body></body></html>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.title, None);
    }

    #[test]
    fn test_absolute_and_relative_links() {
        let html = r#"<body>
            <a href="https://other.com/page">Absolute</a>
            <a href="/local">Rooted</a>
            <a href="sibling">Relative</a>
        </body>"#;
        let parsed = parse_html(html, &base_url());
        let links: Vec<&str> = parsed.links.iter().map(|u| u.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://other.com/page",
                "https://example.com/local",
                "https://example.com/sibling",
            ]
        );
    }

    #[test]
    fn test_link_elements_included() {
        let html = r#"<head><link rel="canonical" href="https://example.com/canonical"></head>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.links.len(), 1);
        assert_eq!(parsed.links[0].as_str(), "https://example.com/canonical");
    }

    #[test]
    fn test_unsupported_schemes_dropped() {
        let html = r#"<body>
            <a href="javascript:alert('no')">Script</a>
            <a href="mailto:test@example.com">Mail</a>
            <a href="tel:+1234567890">Call</a>
            <a href="/kept">Kept</a>
        </body>"#;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.links.len(), 1);
        assert_eq!(parsed.links[0].as_str(), "https://example.com/kept");
    }

    #[test]
    fn test_duplicates_removed_first_seen_order() {
        let html = r#"<body>
            <a href="/b">B</a>
            <a href="/a">A</a>
            <a href="/b">B again</a>
            <a href="/b#section">B with fragment</a>
        </body>"#;
        let parsed = parse_html(html, &base_url());
        let links: Vec<&str> = parsed.links.iter().map(|u| u.as_str()).collect();
        assert_eq!(links, vec!["https://example.com/b", "https://example.com/a"]);
    }

    #[test]
    fn test_fragment_variants_collapse() {
        let html = r##"<body>
            <a href="/page?x=1#top">One</a>
            <a href="/page?x=1#bottom">Same page</a>
        </body>"##;
        let parsed = parse_html(html, &base_url());
        assert_eq!(parsed.links.len(), 1);
        assert_eq!(parsed.links[0].as_str(), "https://example.com/page?x=1");
    }

    #[test]
    fn test_malformed_markup_degrades() {
        let parsed = parse_html("<a href='/x'><div><<<", &base_url());
        assert_eq!(parsed.links.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_html("", &base_url());
        assert_eq!(parsed.title, None);
        assert!(parsed.links.is_empty());
    }
}
