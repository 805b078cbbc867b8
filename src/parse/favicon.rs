//! Favicon URL resolution.
//!
//! Walks the `<link rel>` variants browsers and platforms use for site
//! icons, in priority order, and turns the first usable `href` into an
//! absolute URL. Falls back to `/favicon.ico` on the page's origin.

use log::{debug, warn};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::config::{DEFAULT_FAVICON_PATH, PROTOCOL_RELATIVE_SCHEME};
use crate::utils::{first_attr, parse_selector_with_fallback};

/// `link[rel]` selectors, highest priority first.
const FAVICON_SELECTOR_STRS: [&str; 6] = [
    // Apple touch icons
    r#"link[rel="apple-touch-icon"]"#,
    r#"link[rel="apple-touch-icon-precomposed"]"#,
    // Standard favicons
    r#"link[rel="icon"]"#,
    r#"link[rel="shortcut icon"]"#,
    r#"link[rel="mask-icon"]"#,
    // Legacy, non-standard
    r#"link[rel="favicon"]"#,
];

static FAVICON_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    FAVICON_SELECTOR_STRS
        .iter()
        .map(|s| parse_selector_with_fallback(s, "favicon link"))
        .collect()
});

/// Resolves a favicon href against the page URL.
///
/// - Anything starting with `http` is returned as-is. This is a plain prefix
///   test, so `httpfoo://x` passes through too.
/// - Protocol-relative `//host/path` gets an `https:` scheme.
/// - Everything else is joined to `base_url`.
///
/// # Errors
///
/// Returns the `url` parse error when `base_url` is not an absolute URL or
/// the join fails.
pub(crate) fn resolve_favicon_href(href: &str, base_url: &str) -> Result<String, url::ParseError> {
    if href.starts_with("http") {
        return Ok(href.to_string());
    }

    if href.starts_with("//") {
        return Ok(format!("{PROTOCOL_RELATIVE_SCHEME}{href}"));
    }

    Ok(Url::parse(base_url)?.join(href)?.to_string())
}

/// Builds the `/favicon.ico` URL for the page's origin.
pub(crate) fn fallback_favicon_url(base_url: &str) -> Result<String, url::ParseError> {
    Ok(Url::parse(base_url)?.join(DEFAULT_FAVICON_PATH)?.to_string())
}

/// Returns the best-guess absolute favicon URL for a page.
///
/// Each selector is tried in order; only the first matching element per
/// selector is looked at, and one with an empty or missing `href` moves on to
/// the next selector. A candidate that fails to resolve is logged and
/// skipped. With no usable link the origin's `/favicon.ico` is returned, or
/// an empty string if even that cannot be built.
pub fn resolve_favicon(document: &Html, base_url: &str) -> String {
    for selector in FAVICON_SELECTORS.iter() {
        let Some(href) =
            first_attr(document, selector, "href").filter(|href| !href.is_empty())
        else {
            continue;
        };

        match resolve_favicon_href(&href, base_url) {
            Ok(url) => {
                debug!("Resolved favicon {href:?} to {url}");
                return url;
            }
            Err(e) => {
                warn!("Error processing favicon path: {href}: {e}");
                continue;
            }
        }
    }

    fallback_favicon_url(base_url).unwrap_or_else(|e| {
        debug!("No favicon fallback for {base_url}: {e}");
        String::new()
    })
}
