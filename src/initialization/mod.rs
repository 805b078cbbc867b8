//! Application initialization.
//!
//! This module provides functions to initialize the shared resources the
//! binary needs before fetching:
//! - Logger (plain or JSON)
//! - HTTP client (optional timeout and User-Agent)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
