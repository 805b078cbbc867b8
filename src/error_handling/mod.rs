//! Error handling.
//!
//! This module provides:
//! - The single public fetch error, [`MetadataFetchError`]
//! - Initialization errors for logger and HTTP client setup
//! - Internal categorization of `reqwest` failures
//!
//! Every fetch failure surfaces with the same `"Failed to fetch metadata: "`
//! prefix; the category is only kept for logging.

mod categorization;
mod types;

// Re-export public API
pub(crate) use categorization::categorize_reqwest_error;
pub use types::{InitializationError, MetadataFetchError};
