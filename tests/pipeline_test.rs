use std::time::Duration;

use futures::SinkExt;
use linkrelay::chat_source::ChatSourceError;
use linkrelay::config::BridgeConfig;
use linkrelay::pipeline::{
    PipelineError, RunState, extract_uri_token, has_image_extension, parse_absolute_http_uri,
    run_chat_flow, run_seeded_crawl,
};
use linkrelay::utils::safe_file_name;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_stream::StreamExt;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;
use url::Url;

#[test]
fn first_angle_bracket_token_is_extracted() {
    assert_eq!(
        extract_uri_token("get-image <http://example.com/gallery>"),
        Some("http://example.com/gallery")
    );
    assert_eq!(
        extract_uri_token("get-image <http://a.example> and <http://b.example>"),
        Some("http://a.example")
    );
    assert_eq!(extract_uri_token("get-image no token here"), None);
    assert_eq!(extract_uri_token("get-image <>"), None);
}

#[test]
fn only_absolute_http_uris_survive_parsing() {
    assert!(parse_absolute_http_uri("http://example.com/gallery").is_some());
    assert!(parse_absolute_http_uri("https://example.com/").is_some());
    // Relative reference: no base to resolve against, dropped.
    assert!(parse_absolute_http_uri("gallery/page").is_none());
    // Absolute but not fetchable.
    assert!(parse_absolute_http_uri("mailto:x@example.com").is_none());
    assert!(parse_absolute_http_uri("not a uri at all").is_none());
}

#[test]
fn extension_filter_ignores_case_and_query() {
    let jpg = Url::parse("http://example.com/pics/a.jpg").expect("valid");
    let upper = Url::parse("http://example.com/pics/B.JPG").expect("valid");
    let queried = Url::parse("http://example.com/pics/c.jpg?w=200").expect("valid");
    let png = Url::parse("http://example.com/pics/d.png").expect("valid");

    assert!(has_image_extension(&jpg, ".jpg"));
    assert!(has_image_extension(&upper, ".jpg"));
    assert!(has_image_extension(&queried, ".jpg"));
    assert!(!has_image_extension(&png, ".jpg"));
}

/// The chat flow's link selection: extension filter, then a hard cap.
async fn select_links(links: Vec<Url>, limit: usize) -> Vec<Url> {
    tokio_stream::iter(links)
        .filter(|link| has_image_extension(link, ".jpg"))
        .take(limit)
        .collect()
        .await
}

#[tokio::test]
async fn take_cap_emits_min_of_count_and_limit() {
    let make = |names: &[&str]| -> Vec<Url> {
        names
            .iter()
            .map(|n| Url::parse(&format!("http://example.com/{n}")).expect("valid"))
            .collect()
    };

    assert_eq!(select_links(make(&[]), 2).await.len(), 0);
    assert_eq!(select_links(make(&["a.jpg"]), 2).await.len(), 1);
    assert_eq!(select_links(make(&["a.jpg", "b.jpg"]), 2).await.len(), 2);
    assert_eq!(
        select_links(
            make(&["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]),
            2
        )
        .await
        .len(),
        2
    );
    // Non-qualifying items do not count against the cap.
    let mixed = make(&["a.png", "b.jpg", "c.png", "d.jpg", "e.jpg"]);
    let selected = select_links(mixed, 2).await;
    assert_eq!(selected.len(), 2);
    assert!(selected[0].as_str().ends_with("b.jpg"));
    assert!(selected[1].as_str().ends_with("d.jpg"));
}

/// One-connection server that sends `frames` after the handshake, then
/// closes.
async fn serve_frames(frames: Vec<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut socket = accept_async(stream).await.expect("ws handshake");
        for frame in frames {
            socket
                .send(Message::Text(frame.into()))
                .await
                .expect("send frame");
        }
        socket.send(Message::Close(None)).await.expect("send close");
    });

    format!("ws://{addr}")
}

#[tokio::test]
async fn chat_command_notifies_first_two_matching_links() {
    // End to end: command message -> page fetch -> extension filter ->
    // take(2) -> two notifications, then a clean close.
    let mut server = mockito::Server::new_async().await;

    let gallery = server
        .mock("GET", "/gallery")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><body>
                <img src="a.jpg">
                <img src="b.png">
                <img src="c.jpg">
                <img src="d.jpg">
            </body></html>"#,
        )
        .create_async()
        .await;

    let notified_a = server
        .mock("POST", "/webhook")
        .match_body(mockito::Matcher::Regex(r"a\.jpg".to_string()))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let notified_c = server
        .mock("POST", "/webhook")
        .match_body(mockito::Matcher::Regex(r"c\.jpg".to_string()))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let never_png = server
        .mock("POST", "/webhook")
        .match_body(mockito::Matcher::Regex(r"b\.png".to_string()))
        .expect(0)
        .create_async()
        .await;
    let never_third = server
        .mock("POST", "/webhook")
        .match_body(mockito::Matcher::Regex(r"d\.jpg".to_string()))
        .expect(0)
        .create_async()
        .await;

    let page_url = format!("{}/gallery", server.url());
    let endpoint = serve_frames(vec![
        serde_json::json!({
            "type": "message",
            "channel": "C1",
            "user": "U1",
            "text": format!("get-image <{page_url}>"),
        })
        .to_string(),
        // Non-command chatter is ignored.
        serde_json::json!({ "type": "message", "text": "hello" }).to_string(),
    ])
    .await;

    let handshake = server
        .mock("GET", "/rtm.start")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(format!(r#"{{"ok":true,"url":"{endpoint}"}}"#))
        .create_async()
        .await;

    let config = BridgeConfig::builder()
        .api_token("xoxb-test")
        .webhook_url(format!("{}/webhook", server.url()))
        .handshake_url(format!("{}/rtm.start", server.url()))
        .request_timeout(Duration::from_secs(5))
        .build();

    let state = timeout(Duration::from_secs(15), run_chat_flow(&config))
        .await
        .expect("flow settles")
        .expect("flow succeeds");
    assert_eq!(state, RunState::Closed);

    handshake.assert_async().await;
    gallery.assert_async().await;
    notified_a.assert_async().await;
    notified_c.assert_async().await;
    never_png.assert_async().await;
    never_third.assert_async().await;
}

#[tokio::test]
async fn refused_handshake_fails_the_chat_flow() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/rtm.start")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"ok":false,"error":"invalid_auth"}"#)
        .create_async()
        .await;

    let config = BridgeConfig::builder()
        .api_token("bad")
        .webhook_url("http://example.com/webhook")
        .handshake_url(format!("{}/rtm.start", server.url()))
        .request_timeout(Duration::from_secs(5))
        .build();

    let result = run_chat_flow(&config).await;
    assert!(matches!(
        result,
        Err(PipelineError::ChatSource(
            ChatSourceError::HandshakeRefused(_)
        ))
    ));
}

#[tokio::test]
async fn unconfigured_token_fails_fast() {
    let config = BridgeConfig::builder().build();
    let result = run_chat_flow(&config).await;
    assert!(matches!(
        result,
        Err(PipelineError::ChatSource(ChatSourceError::Config(_)))
    ));
}

#[tokio::test]
async fn seeded_crawl_downloads_what_it_can() {
    let mut server = mockito::Server::new_async().await;
    let _page = server
        .mock("GET", "/page")
        .with_status(200)
        .with_body(r#"<html><body><img src="x.jpg"><img src="y.jpg"></body></html>"#)
        .create_async()
        .await;
    let _x = server
        .mock("GET", "/x.jpg")
        .with_status(200)
        .with_body("X")
        .create_async()
        .await;
    let _y = server
        .mock("GET", "/y.jpg")
        .with_status(500)
        .create_async()
        .await;
    let _dead = server
        .mock("GET", "/dead-page")
        .with_status(404)
        .create_async()
        .await;

    let dir = TempDir::new().expect("temp dir");
    let config = BridgeConfig::builder()
        .download_dir(dir.path())
        .settle_delay(Duration::ZERO)
        .request_timeout(Duration::from_secs(5))
        .build();

    // The dead seed is isolated; the live one still drives downloads.
    let seeds = vec![
        Url::parse(&format!("{}/dead-page", server.url())).expect("valid"),
        Url::parse(&format!("{}/page", server.url())).expect("valid"),
    ];

    let summary = timeout(Duration::from_secs(15), run_seeded_crawl(&config, &seeds))
        .await
        .expect("crawl settles")
        .expect("crawl succeeds");

    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.downloaded, 1);

    let x_url = Url::parse(&format!("{}/x.jpg", server.url())).expect("valid");
    assert!(dir.path().join(safe_file_name(&x_url)).exists());
}
