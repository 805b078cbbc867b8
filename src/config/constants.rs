//! Configuration constants.
//!
//! Defaults used by the CLI and by the extraction rules.

/// Page fetched when no URL is given on the command line.
pub const DEFAULT_URL: &str = "https://www.plasticsurgery.org/news/press-releases/american-society-of-plastic-surgeons-reveals-2022s-most-sought-after-procedures";

/// Browser-like User-Agent offered by `--user-agent` help text.
///
/// Not sent unless the user passes it explicitly; the default client keeps
/// reqwest's own header so a bare run issues the same request as any plain
/// HTTP GET.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Path joined to the page URL when the document declares no icon link.
pub const DEFAULT_FAVICON_PATH: &str = "/favicon.ico";

/// Prefix of every fetch error message.
pub const ERROR_PREFIX: &str = "Failed to fetch metadata: ";

/// Scheme prepended to protocol-relative (`//host/path`) favicon hrefs.
pub const PROTOCOL_RELATIVE_SCHEME: &str = "https:";
