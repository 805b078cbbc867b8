//! Metadata fetching.
//!
//! Downloads a page once and runs the extraction rules over it. Every
//! failure along the way comes back as a [`MetadataFetchError`].

mod request;

use log::debug;

use crate::error_handling::MetadataFetchError;
use crate::models::PageMetadata;
use crate::parse::extract_metadata_from_html;

use request::fetch_page_body;

/// Fetches `url` and extracts its metadata with a default client.
///
/// The default client has no timeout, so the call waits until the server
/// answers or the transport gives up.
///
/// # Errors
///
/// Returns [`MetadataFetchError`] for any network, status, or body failure;
/// its message starts with `"Failed to fetch metadata: "`.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), page_metadata::MetadataFetchError> {
/// let metadata = page_metadata::fetch_metadata("https://example.com").await?;
/// println!("{}", metadata.title);
/// # Ok(())
/// # }
/// ```
pub async fn fetch_metadata(url: &str) -> Result<PageMetadata, MetadataFetchError> {
    fetch_metadata_with(&reqwest::Client::new(), url).await
}

/// Fetches `url` with a caller-supplied client and extracts its metadata.
///
/// Relative favicon paths resolve against `url` as given, not against the
/// final URL after redirects.
///
/// # Errors
///
/// See [`fetch_metadata`].
pub async fn fetch_metadata_with(
    client: &reqwest::Client,
    url: &str,
) -> Result<PageMetadata, MetadataFetchError> {
    let body = fetch_page_body(client, url).await.map_err(|e| {
        let error = MetadataFetchError::from(e);
        debug!("Fetch of {url} failed ({}): {}", error.kind(), error.message());
        error
    })?;

    Ok(extract_metadata_from_html(&body, url))
}
