//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::config::ERROR_PREFIX;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Where a metadata fetch broke down.
///
/// Kept inside the crate: callers only ever see the single
/// [`MetadataFetchError`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub(crate) enum FailureKind {
    /// The request could not be built (malformed URL, unsupported scheme).
    Request,
    /// TCP/TLS connection failed or was refused.
    Connect,
    /// The configured timeout elapsed.
    Timeout,
    /// The server answered with a non-2xx status.
    Status,
    /// The body could not be read or decoded as text.
    Body,
    /// Anything else reqwest reports (redirect loops, protocol errors).
    Other,
}

impl FailureKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Request => "request error",
            FailureKind::Connect => "connect error",
            FailureKind::Timeout => "timeout",
            FailureKind::Status => "HTTP status error",
            FailureKind::Body => "body error",
            FailureKind::Other => "other error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one error a metadata fetch can fail with.
///
/// Displays as `"Failed to fetch metadata: "` followed by the underlying
/// failure's message, whatever stage it came from.
#[derive(Error, Debug)]
#[error("{}{}", ERROR_PREFIX, .message)]
pub struct MetadataFetchError {
    kind: FailureKind,
    message: String,
}

impl MetadataFetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The underlying failure's message, without the fixed prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl From<ReqwestError> for MetadataFetchError {
    fn from(error: ReqwestError) -> Self {
        let kind = super::categorize_reqwest_error(&error);
        MetadataFetchError::new(kind, error.to_string())
    }
}
