//! Extracted page metadata.

use serde::Serialize;

/// Metadata extracted from a single page.
///
/// Every field is a plain string that defaults to empty; nothing is ever
/// absent. Values are passed through as found in the markup (no trimming,
/// no date normalization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// `og:title`, else the `<title>` text
    pub title: String,
    /// `og:image`, else `twitter:image`
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// `og:description`, else the `description` meta tag
    pub description: String,
    /// Publish/modify timestamp or `<time datetime>`, unvalidated
    pub date: String,
    /// Absolute favicon URL
    pub favicon: String,
}
