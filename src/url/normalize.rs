use url::Url;

/// Normalizes an href against a base URL into a canonical crawl target
///
/// # Normalization Steps
///
/// 1. Resolve the href (absolute or relative) against `base`
/// 2. Reject anything that is not HTTP or HTTPS (mailto, javascript, tel,
///    data, ftp, ...)
/// 3. Strip the fragment component
///
/// The canonical form is `scheme://host/path[?query]` exactly as URL
/// resolution yields it: the host is lowercased per URL semantics, the path
/// is kept verbatim, and there is no trailing-slash rewriting. Ports and
/// userinfo survive untouched.
///
/// Returns `None` for empty hrefs, unresolvable references, and unsupported
/// schemes. Pure function; normalizing the same input twice always yields
/// the same output.
///
/// # Examples
///
/// ```
/// use pagesift::url::normalize_href;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// let link = normalize_href(&base, "intro#setup").unwrap();
/// assert_eq!(link.as_str(), "https://example.com/docs/intro");
///
/// assert!(normalize_href(&base, "mailto:team@example.com").is_none());
/// ```
pub fn normalize_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut resolved = base.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);
    Some(resolved)
}

/// Canonicalizes a seed URL string
///
/// Seeds must already be absolute; relative input is rejected rather than
/// resolved against anything. The fragment is stripped so the seed compares
/// equal to any link pointing back at it.
pub fn canonicalize_seed(seed: &str) -> Result<Url, String> {
    let mut url = Url::parse(seed).map_err(|e| e.to_string())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!(
            "only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        ));
    }

    if url.host_str().is_none() {
        return Err("URL has no host".to_string());
    }

    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_absolute_href_kept() {
        let result = normalize_href(&base(), "https://other.com/page").unwrap();
        assert_eq!(result.as_str(), "https://other.com/page");
    }

    #[test]
    fn test_relative_href_resolved() {
        let result = normalize_href(&base(), "/about").unwrap();
        assert_eq!(result.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_sibling_href_resolved() {
        let result = normalize_href(&base(), "other-post").unwrap();
        assert_eq!(result.as_str(), "https://example.com/blog/other-post");
    }

    #[test]
    fn test_fragment_stripped() {
        let result = normalize_href(&base(), "https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_only_resolves_to_base() {
        // A same-page anchor collapses onto the base document itself.
        let result = normalize_href(&base(), "#top").unwrap();
        assert_eq!(result.as_str(), "https://example.com/blog/post");
    }

    #[test]
    fn test_query_preserved() {
        let result = normalize_href(&base(), "/search?q=rust&page=2").unwrap();
        assert_eq!(result.as_str(), "https://example.com/search?q=rust&page=2");
    }

    #[test]
    fn test_port_preserved() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let result = normalize_href(&base, "/page").unwrap();
        assert_eq!(result.as_str(), "http://127.0.0.1:8080/page");
    }

    #[test]
    fn test_mailto_rejected() {
        assert!(normalize_href(&base(), "mailto:test@example.com").is_none());
    }

    #[test]
    fn test_javascript_rejected() {
        assert!(normalize_href(&base(), "javascript:void(0)").is_none());
    }

    #[test]
    fn test_tel_rejected() {
        assert!(normalize_href(&base(), "tel:+1234567890").is_none());
    }

    #[test]
    fn test_data_uri_rejected() {
        assert!(normalize_href(&base(), "data:text/html,<h1>x</h1>").is_none());
    }

    #[test]
    fn test_empty_href_rejected() {
        assert!(normalize_href(&base(), "").is_none());
        assert!(normalize_href(&base(), "   ").is_none());
    }

    #[test]
    fn test_host_lowercased() {
        let result = normalize_href(&base(), "https://EXAMPLE.COM/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/Page");
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let canonical = normalize_href(&base(), "/a/b?x=1#frag").unwrap();
        let again = normalize_href(&base(), canonical.as_str()).unwrap();
        assert_eq!(canonical, again);
    }

    #[test]
    fn test_deterministic() {
        let first = normalize_href(&base(), "../up/./here");
        let second = normalize_href(&base(), "../up/./here");
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonicalize_seed_strips_fragment() {
        let url = canonicalize_seed("https://example.com/start#main").unwrap();
        assert_eq!(url.as_str(), "https://example.com/start");
    }

    #[test]
    fn test_canonicalize_seed_rejects_scheme() {
        assert!(canonicalize_seed("ftp://example.com/").is_err());
    }

    #[test]
    fn test_canonicalize_seed_rejects_relative() {
        assert!(canonicalize_seed("/just/a/path").is_err());
    }
}
