//! Page download.

use log::debug;

/// Issues one GET for `url` and returns the body as text.
///
/// Non-2xx responses are turned into errors. No retries; redirects follow
/// the client's policy.
///
/// # Errors
///
/// Returns the `reqwest::Error` for an invalid URL, a transport failure, an
/// error status, or a body that cannot be read.
pub(crate) async fn fetch_page_body(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, reqwest::Error> {
    debug!("Fetching {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    debug!(
        "Response for {url}: {} {} (final url {})",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status Code"),
        response.url()
    );

    let body = response.error_for_status()?.text().await?;
    debug!("Read {} bytes from {url}", body.len());
    Ok(body)
}
