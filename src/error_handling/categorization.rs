//! Error categorization.
//!
//! Maps `reqwest` failures onto the crate's internal [`FailureKind`].

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status errors are checked first because reqwest can flag a status error
/// as a request error too.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FailureKind` for the error.
pub(crate) fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_status() || error.status().is_some() {
        return FailureKind::Status;
    }

    if error.is_builder() {
        FailureKind::Request
    } else if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_body() || error.is_decode() {
        FailureKind::Body
    } else {
        FailureKind::Other
    }
}
