//! HTML parsing and metadata extraction.
//!
//! This module extracts the page metadata fields from HTML content:
//! - Title, preview image and description (Open Graph, Twitter Card, plain meta)
//! - Publish date (article meta tags, `<time datetime>`)
//! - Favicon (`<link rel>` variants, `/favicon.ico` fallback)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod favicon;
mod html;

// Re-export public API
pub use favicon::resolve_favicon;
pub use html::{
    extract_date, extract_description, extract_image_url, extract_metadata,
    extract_metadata_from_html, extract_title,
};
