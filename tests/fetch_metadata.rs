//! Integration tests for the fetch path against a local mock server.

use page_metadata::{fetch_metadata, fetch_metadata_with, PageMetadata};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = r#"<!doctype html>
<html>
  <head>
    <title>Fallback title</title>
    <meta property="og:title" content="Hello">
    <meta property="og:image" content="http://x/y.png">
    <meta name="description" content="D">
    <link rel="icon" href="/f.ico">
  </head>
  <body>
    <time datetime="2024-01-01">New Year</time>
  </body>
</html>"#;

async fn serve(route: &str, template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_fetch_metadata_end_to_end() {
    let mock_server = serve(
        "/page",
        ResponseTemplate::new(200).set_body_raw(FIXTURE, "text/html; charset=utf-8"),
    )
    .await;
    let url = format!("{}/page", mock_server.uri());

    let metadata = fetch_metadata(&url).await.expect("fetch should succeed");

    assert_eq!(
        metadata,
        PageMetadata {
            title: "Hello".to_string(),
            image_url: "http://x/y.png".to_string(),
            description: "D".to_string(),
            date: "2024-01-01".to_string(),
            favicon: format!("{}/f.ico", mock_server.uri()),
        }
    );
}

#[tokio::test]
async fn test_fetch_metadata_page_without_metadata() {
    let mock_server = serve(
        "/bare",
        ResponseTemplate::new(200).set_body_raw("<html><body>hi</body></html>", "text/html"),
    )
    .await;
    let url = format!("{}/bare", mock_server.uri());

    let metadata = fetch_metadata(&url).await.expect("fetch should succeed");

    assert_eq!(metadata.title, "");
    assert_eq!(metadata.image_url, "");
    assert_eq!(metadata.description, "");
    assert_eq!(metadata.date, "");
    assert_eq!(metadata.favicon, format!("{}/favicon.ico", mock_server.uri()));
}

#[tokio::test]
async fn test_fetch_metadata_ignores_content_type() {
    // Bodies are parsed as HTML whatever the server claims
    let mock_server = serve(
        "/plain",
        ResponseTemplate::new(200).set_body_raw("<title>Plain text?</title>", "text/plain"),
    )
    .await;
    let url = format!("{}/plain", mock_server.uri());

    let metadata = fetch_metadata(&url).await.expect("fetch should succeed");
    assert_eq!(metadata.title, "Plain text?");
}

#[tokio::test]
async fn test_fetch_metadata_connection_refused() {
    // Bind then drop a listener so nothing is listening on the port
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let error = fetch_metadata(&format!("http://{}/", addr))
        .await
        .expect_err("closed port must fail");

    assert!(
        error.to_string().starts_with("Failed to fetch metadata: "),
        "unexpected message: {}",
        error
    );
    assert!(!error.message().is_empty());
}

#[tokio::test]
async fn test_fetch_metadata_error_status() {
    let mock_server = serve(
        "/missing",
        ResponseTemplate::new(404).set_body_raw("<title>Not Found</title>", "text/html"),
    )
    .await;
    let url = format!("{}/missing", mock_server.uri());

    let error = fetch_metadata(&url).await.expect_err("404 must fail");

    assert!(error.to_string().starts_with("Failed to fetch metadata: "));
    assert!(error.message().contains("404"), "unexpected message: {}", error);
}

#[tokio::test]
async fn test_fetch_metadata_invalid_url() {
    let error = fetch_metadata("not a url")
        .await
        .expect_err("relative URL must fail");
    assert!(error.to_string().starts_with("Failed to fetch metadata: "));
}

#[tokio::test]
async fn test_fetch_metadata_with_client_timeout() {
    let mock_server = serve(
        "/slow",
        ResponseTemplate::new(200)
            .set_body_raw(FIXTURE, "text/html")
            .set_delay(Duration::from_secs(5)),
    )
    .await;
    let url = format!("{}/slow", mock_server.uri());
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client");

    let error = fetch_metadata_with(&client, &url)
        .await
        .expect_err("timeout must fail");
    assert!(error.to_string().starts_with("Failed to fetch metadata: "));
}

#[tokio::test]
async fn test_fetch_metadata_resolves_against_requested_url() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/new/page", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"<link rel="icon" href="icon.png">"#, "text/html"),
        )
        .mount(&mock_server)
        .await;

    let metadata = fetch_metadata(&format!("{}/old", mock_server.uri()))
        .await
        .expect("redirect should be followed");

    assert_eq!(metadata.favicon, format!("{}/icon.png", mock_server.uri()));
}
