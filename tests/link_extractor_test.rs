use linkrelay::link_extractor::{ExtractError, collect_image_refs, extract_image_links};
use std::time::Duration;
use url::Url;

fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client builds")
}

#[test]
fn references_resolve_in_document_order() {
    let base = Url::parse("http://example.com/gallery/index.html").expect("valid base");
    let body = r#"
        <html><body>
            <img src="a.jpg">
            <img src="http://cdn.example.net/b.png">
            <img src="../c.jpg">
        </body></html>
    "#;

    let links = collect_image_refs(body, &base);
    let rendered: Vec<&str> = links.iter().map(Url::as_str).collect();
    assert_eq!(
        rendered,
        vec![
            "http://example.com/gallery/a.jpg",
            "http://cdn.example.net/b.png",
            "http://example.com/c.jpg",
        ]
    );
}

#[test]
fn elements_without_usable_references_are_skipped() {
    let base = Url::parse("http://example.com/").expect("valid base");
    let body = r#"
        <img>
        <img src="http://[broken/a.jpg">
        <img src="ok.jpg">
        <img src="ok.jpg">
    "#;

    let links = collect_image_refs(body, &base);
    let rendered: Vec<&str> = links.iter().map(Url::as_str).collect();
    // One emission per occurrence; the bad element drops without taking
    // its siblings with it.
    assert_eq!(
        rendered,
        vec!["http://example.com/ok.jpg", "http://example.com/ok.jpg"]
    );
}

#[test]
fn document_without_images_yields_nothing() {
    let base = Url::parse("http://example.com/").expect("valid base");
    assert!(collect_image_refs("<html><body><p>hi</p></body></html>", &base).is_empty());
}

#[tokio::test]
async fn extraction_fetches_and_resolves() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/gallery")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(r#"<html><body><img src="pics/a.jpg"><img src="b.jpg"></body></html>"#)
        .create_async()
        .await;

    let page = Url::parse(&format!("{}/gallery", server.url())).expect("valid page url");
    let links = extract_image_links(&test_client(), &page)
        .await
        .expect("extraction succeeds");

    assert_eq!(links.len(), 2);
    assert!(links[0].as_str().ends_with("/pics/a.jpg"));
    assert!(links[1].as_str().ends_with("/b.jpg"));
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_fetch_is_a_stream_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let page = Url::parse(&format!("{}/missing", server.url())).expect("valid page url");
    let result = extract_image_links(&test_client(), &page).await;

    assert!(matches!(result, Err(ExtractError::Fetch(_))));
}
