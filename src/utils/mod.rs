//! Utility functions.
//!
//! This module provides CSS selector parsing and the first-match lookup
//! helpers the extraction rules are built from.

mod selector;

pub use selector::{first_attr, first_non_empty, first_text, parse_selector_with_fallback};
