//! page_metadata library: one-shot web page metadata extraction
//!
//! Fetches a single page and pulls out a flat record of title, preview
//! image, description, publish date and favicon, using fallback chains over
//! Open Graph, Twitter Card, plain meta tags, `<time>` elements and
//! `<link rel>` icon variants.
//!
//! # Example
//!
//! ```no_run
//! use page_metadata::fetch_metadata;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metadata = fetch_metadata("https://example.com/article").await?;
//! println!("{}", serde_json::to_string_pretty(&metadata)?);
//! # Ok(())
//! # }
//! ```
//!
//! Already-downloaded markup can be processed without any network access:
//!
//! ```
//! use page_metadata::extract_metadata_from_html;
//!
//! let html = r#"<title>Hi</title><link rel="icon" href="/f.ico">"#;
//! let metadata = extract_metadata_from_html(html, "https://example.com/post");
//! assert_eq!(metadata.title, "Hi");
//! assert_eq!(metadata.favicon, "https://example.com/f.ico");
//! ```
//!
//! # Requirements
//!
//! The fetch functions require a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
mod parse;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, MetadataFetchError};
pub use fetch::{fetch_metadata, fetch_metadata_with};
pub use models::PageMetadata;
pub use parse::{
    extract_date, extract_description, extract_image_url, extract_metadata,
    extract_metadata_from_html, extract_title, resolve_favicon,
};
