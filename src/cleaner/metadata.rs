use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Meta tag names/properties worth keeping
const META_WHITELIST: &[&str] = &[
    "description",
    "keywords",
    "author",
    "og:title",
    "og:description",
    "twitter:title",
    "twitter:description",
];

/// Reserved metadata key for parsed JSON-LD blocks
const STRUCTURED_DATA_KEY: &str = "structured_data";

/// Extracts whitelisted `<meta>` values and JSON-LD structured data
///
/// The returned mapping holds the meta tag content strings keyed by their
/// `name` (or `property`, when `name` is absent), plus the parsed value of
/// any `application/ld+json` script block under the `structured_data` key.
/// Malformed JSON blocks are skipped silently; malformed markup degrades to
/// an empty mapping. When several valid JSON-LD blocks are present the last
/// one wins.
pub fn extract_metadata(html: &str) -> BTreeMap<String, serde_json::Value> {
    let document = Html::parse_document(html);
    let mut metadata = BTreeMap::new();

    if let Ok(meta_selector) = Selector::parse("meta") {
        for element in document.select(&meta_selector) {
            let key = element
                .value()
                .attr("name")
                .or_else(|| element.value().attr("property"));

            let (Some(key), Some(content)) = (key, element.value().attr("content")) else {
                continue;
            };

            if !content.is_empty() && META_WHITELIST.contains(&key) {
                metadata.insert(key.to_string(), serde_json::Value::from(content));
            }
        }
    }

    if let Ok(ld_selector) = Selector::parse(r#"script[type="application/ld+json"]"#) {
        for script in document.select(&ld_selector) {
            let body = script.text().collect::<String>();
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
                metadata.insert(STRUCTURED_DATA_KEY.to_string(), value);
            }
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelisted_meta_collected() {
        let html = r#"<html><head>
            <meta name="description" content="A page about things">
            <meta name="keywords" content="one, two">
            <meta name="author" content="Jane Doe">
        </head></html>"#;
        let metadata = extract_metadata(html);
        assert_eq!(metadata["description"], "A page about things");
        assert_eq!(metadata["keywords"], "one, two");
        assert_eq!(metadata["author"], "Jane Doe");
    }

    #[test]
    fn test_property_meta_collected() {
        let html = r#"<head>
            <meta property="og:title" content="Open Graph Title">
            <meta property="twitter:description" content="Tweet blurb">
        </head>"#;
        let metadata = extract_metadata(html);
        assert_eq!(metadata["og:title"], "Open Graph Title");
        assert_eq!(metadata["twitter:description"], "Tweet blurb");
    }

    #[test]
    fn test_unlisted_meta_ignored() {
        let html = r#"<head>
            <meta name="viewport" content="width=device-width">
            <meta name="robots" content="noindex">
        </head>"#;
        let metadata = extract_metadata(html);
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_empty_content_ignored() {
        let html = r#"<head><meta name="description" content=""></head>"#;
        let metadata = extract_metadata(html);
        assert!(!metadata.contains_key("description"));
    }

    #[test]
    fn test_structured_data_parsed() {
        let html = r#"<head><script type="application/ld+json">
            {"@type": "Article", "headline": "Hello"}
        </script></head>"#;
        let metadata = extract_metadata(html);
        assert_eq!(metadata["structured_data"]["headline"], "Hello");
    }

    #[test]
    fn test_malformed_structured_data_skipped() {
        let html = r#"<head><script type="application/ld+json">
            {not json at all
        </script></head>"#;
        let metadata = extract_metadata(html);
        assert!(!metadata.contains_key("structured_data"));
    }

    #[test]
    fn test_last_valid_structured_data_wins() {
        let html = r#"<head>
            <script type="application/ld+json">{"order": "first"}</script>
            <script type="application/ld+json">{"order": "second"}</script>
        </head>"#;
        let metadata = extract_metadata(html);
        assert_eq!(metadata["structured_data"]["order"], "second");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_metadata("").is_empty());
    }
}
