use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Tags whose entire subtree is discarded before text extraction
const REMOVE_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "object", "embed", "applet", "audio", "video",
    "source", "track", "canvas", "svg", "math", "map", "area", "input", "button", "select",
    "textarea", "form", "fieldset", "legend", "datalist", "output", "progress", "meter",
    "details", "summary", "dialog",
];

/// Class/id patterns that mark ad and boilerplate regions
const AD_PATTERNS: &[&str] = &[
    r"ad[-_]?banner",
    r"ad[-_]?box",
    r"ad[-_]?container",
    r"advertisement",
    r"banner[-_]?ad",
    r"google[-_]?ad",
    r"sponsored",
    r"promo[-_]?box",
    r"social[-_]?media",
    r"share[-_]?buttons",
    r"cookie[-_]?notice",
    r"popup",
    r"overlay",
    r"modal",
    r"newsletter",
    r"subscribe",
    r"comment",
    r"disqus",
    r"sidebar",
    r"widget",
    r"related[-_]?posts",
];

/// Block-level tags whose text is collected into the cleaned body
const CONTENT_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "td", "th", "div", "article", "section",
];

/// Text fragments at or below this length are treated as noise
const MIN_FRAGMENT_CHARS: usize = 20;

/// HTML cleaner with a compiled ad/boilerplate pattern set
///
/// Construct one per crawl and reuse it across pages; compiling the pattern
/// set is the only non-trivial setup cost.
pub struct Cleaner {
    ad_pattern: Regex,
}

impl Cleaner {
    /// Creates a cleaner with the fixed ad/boilerplate pattern set compiled
    pub fn new() -> Self {
        let pattern = format!("(?i){}", AD_PATTERNS.join("|"));
        Self {
            // The pattern set is a fixed literal; compilation cannot fail.
            ad_pattern: Regex::new(&pattern).expect("ad pattern set compiles"),
        }
    }

    /// Cleans raw markup into a flattened text body
    ///
    /// Comment nodes, the removal tag set, and ad/boilerplate regions are
    /// pruned, then text is collected from block-level content tags in
    /// document order. Fragments of 20 characters or fewer are dropped as
    /// noise; survivors are whitespace-collapsed and joined with one blank
    /// line between them.
    ///
    /// Total over malformed input: parsing recovers what it can and the
    /// worst case is an empty string.
    pub fn clean(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let selector = match Selector::parse(&CONTENT_TAGS.join(", ")) {
            Ok(s) => s,
            Err(_) => return String::new(),
        };

        let mut fragments = Vec::new();
        for element in document.select(&selector) {
            if self.is_pruned(element) || self.has_pruned_ancestor(element) {
                continue;
            }

            let mut raw = String::new();
            self.collect_text(element, &mut raw);

            // Elements left empty by pruning contribute nothing here, so no
            // separate empty-node removal pass is needed.
            let fragment = collapse_whitespace(&raw);
            if fragment.chars().count() > MIN_FRAGMENT_CHARS {
                fragments.push(fragment);
            }
        }

        fragments.join("\n\n").trim().to_string()
    }

    /// Extracts whitelisted meta tags and JSON-LD structured data
    ///
    /// See [`extract_metadata`](crate::cleaner::extract_metadata); provided
    /// as a method so callers holding a `Cleaner` need only one collaborator.
    pub fn extract_metadata(&self, html: &str) -> BTreeMap<String, serde_json::Value> {
        super::metadata::extract_metadata(html)
    }

    /// Whether this element itself is in the removal set
    fn is_pruned(&self, element: ElementRef<'_>) -> bool {
        let name = element.value().name();
        if REMOVE_TAGS.contains(&name) {
            return true;
        }

        if let Some(class) = element.value().attr("class") {
            if self.ad_pattern.is_match(class) {
                return true;
            }
        }
        if let Some(id) = element.value().attr("id") {
            if self.ad_pattern.is_match(id) {
                return true;
            }
        }

        false
    }

    /// Whether any enclosing element is in the removal set
    fn has_pruned_ancestor(&self, element: ElementRef<'_>) -> bool {
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| self.is_pruned(ancestor))
    }

    /// Appends the element's text, skipping pruned subtrees
    ///
    /// Comment and other non-text node kinds are dropped on the way down.
    fn collect_text(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(text);
            } else if let Some(child_element) = ElementRef::wrap(child) {
                if !self.is_pruned(child_element) {
                    self.collect_text(child_element, out);
                }
            }
        }
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses every whitespace run to a single space and trims the ends
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
