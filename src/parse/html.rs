//! Field extraction from a parsed document.
//!
//! Each field is an ordered chain of meta-tag or element lookups; the first
//! lookup that yields a non-empty string wins and the rest are skipped:
//! - Title: `og:title`, then `<title>`
//! - Image: `og:image`, then `twitter:image`
//! - Description: `og:description`, then `description`
//! - Date: `article:published_time`, then `article:modified_time`, then the
//!   first `<time datetime>`

use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::models::PageMetadata;
use crate::utils::{first_attr, first_non_empty, first_text, parse_selector_with_fallback};

use super::favicon::resolve_favicon;

// CSS selector strings
const OG_TITLE_SELECTOR_STR: &str = r#"meta[property="og:title"]"#;
const TITLE_SELECTOR_STR: &str = "title";
const OG_IMAGE_SELECTOR_STR: &str = r#"meta[property="og:image"]"#;
const TWITTER_IMAGE_SELECTOR_STR: &str = r#"meta[name="twitter:image"]"#;
const OG_DESCRIPTION_SELECTOR_STR: &str = r#"meta[property="og:description"]"#;
const META_DESCRIPTION_SELECTOR_STR: &str = r#"meta[name="description"]"#;
const PUBLISHED_TIME_SELECTOR_STR: &str = r#"meta[property="article:published_time"]"#;
const MODIFIED_TIME_SELECTOR_STR: &str = r#"meta[property="article:modified_time"]"#;
const TIME_SELECTOR_STR: &str = "time";

static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(OG_TITLE_SELECTOR_STR, "og:title"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "title"));
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(OG_IMAGE_SELECTOR_STR, "og:image"));
static TWITTER_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TWITTER_IMAGE_SELECTOR_STR, "twitter:image"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(OG_DESCRIPTION_SELECTOR_STR, "og:description")
});
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(META_DESCRIPTION_SELECTOR_STR, "meta description")
});
static PUBLISHED_TIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(PUBLISHED_TIME_SELECTOR_STR, "article:published_time")
});
static MODIFIED_TIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(MODIFIED_TIME_SELECTOR_STR, "article:modified_time")
});
static TIME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TIME_SELECTOR_STR, "time element"));

/// Extracts the page title.
///
/// Prefers `<meta property="og:title">` content, then the text of the first
/// `<title>` element. The value is returned untrimmed.
pub fn extract_title(document: &Html) -> String {
    let og_title = || first_attr(document, &OG_TITLE_SELECTOR, "content");
    let title_text = || first_text(document, &TITLE_SELECTOR);
    first_non_empty([
        &og_title as &dyn Fn() -> Option<String>,
        &title_text,
    ])
}

/// Extracts the preview image URL as found in the markup.
pub fn extract_image_url(document: &Html) -> String {
    let og_image = || first_attr(document, &OG_IMAGE_SELECTOR, "content");
    let twitter_image = || first_attr(document, &TWITTER_IMAGE_SELECTOR, "content");
    first_non_empty([
        &og_image as &dyn Fn() -> Option<String>,
        &twitter_image,
    ])
}

/// Extracts the short description.
pub fn extract_description(document: &Html) -> String {
    let og_description = || first_attr(document, &OG_DESCRIPTION_SELECTOR, "content");
    let meta_description = || first_attr(document, &META_DESCRIPTION_SELECTOR, "content");
    first_non_empty([
        &og_description as &dyn Fn() -> Option<String>,
        &meta_description,
    ])
}

/// Extracts the publish date string.
///
/// The value is whatever the markup carries; it is not parsed or normalized,
/// so `"2024-01-01"` and `"Jan 1"` come back unchanged.
pub fn extract_date(document: &Html) -> String {
    let published = || first_attr(document, &PUBLISHED_TIME_SELECTOR, "content");
    let modified = || first_attr(document, &MODIFIED_TIME_SELECTOR, "content");
    let time_element = || first_attr(document, &TIME_SELECTOR, "datetime");
    first_non_empty([
        &published as &dyn Fn() -> Option<String>,
        &modified,
        &time_element,
    ])
}

/// Runs every field rule plus favicon resolution over a parsed document.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `base_url` - The page URL, used to resolve relative favicon paths
pub fn extract_metadata(document: &Html, base_url: &str) -> PageMetadata {
    let metadata = PageMetadata {
        title: extract_title(document),
        image_url: extract_image_url(document),
        description: extract_description(document),
        date: extract_date(document),
        favicon: resolve_favicon(document, base_url),
    };
    debug!("Extracted metadata for {base_url}: {metadata:?}");
    metadata
}

/// Parses raw HTML and extracts metadata from it.
///
/// Parsing never fails: malformed markup is repaired by the HTML5 parser the
/// same way a browser would.
pub fn extract_metadata_from_html(html: &str, base_url: &str) -> PageMetadata {
    let document = Html::parse_document(html);
    extract_metadata(&document, base_url)
}
