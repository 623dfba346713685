use linkrelay::utils::{is_http_url, parse_uri, resolve_reference, safe_file_name};
use proptest::prelude::*;
use url::Url;

#[test]
fn relative_reference_resolves_against_base() {
    let base = Url::parse("http://example.com/gallery/index.html").expect("valid base");

    let sibling = resolve_reference(&base, "a.jpg").expect("resolves");
    assert_eq!(sibling.as_str(), "http://example.com/gallery/a.jpg");

    let rooted = resolve_reference(&base, "/top.png").expect("resolves");
    assert_eq!(rooted.as_str(), "http://example.com/top.png");

    let parent = resolve_reference(&base, "../up.gif").expect("resolves");
    assert_eq!(parent.as_str(), "http://example.com/up.gif");
}

#[test]
fn absolute_reference_passes_through_unchanged() {
    let base = Url::parse("http://example.com/gallery/").expect("valid base");
    let absolute = "http://cdn.example.net/images/b.png";

    let resolved = resolve_reference(&base, absolute).expect("resolves");
    assert_eq!(resolved.as_str(), absolute);
}

#[test]
fn relative_reference_without_base_fails_to_parse() {
    assert!(parse_uri("images/a.jpg").is_err());
}

#[test]
fn http_url_filter_rejects_other_schemes() {
    let http = Url::parse("http://example.com/").expect("valid");
    let https = Url::parse("https://example.com/").expect("valid");
    let mailto = Url::parse("mailto:someone@example.com").expect("valid");
    let data = Url::parse("data:text/plain,hi").expect("valid");

    assert!(is_http_url(&http));
    assert!(is_http_url(&https));
    assert!(!is_http_url(&mailto));
    assert!(!is_http_url(&data));
}

#[test]
fn file_name_replaces_unsafe_characters() {
    let url = Url::parse("http://example.com/a/b.jpg?size=2").expect("valid");
    assert_eq!(
        safe_file_name(&url),
        "http___example.com_a_b.jpg_size_2"
    );
}

proptest! {
    // Same URL maps to the same name on every call, and the name only
    // carries filesystem-safe characters.
    #[test]
    fn file_name_is_deterministic_and_safe(path in "[a-zA-Z0-9/._?&=-]{0,40}") {
        if let Ok(url) = Url::parse(&format!("http://example.com/{path}")) {
            let first = safe_file_name(&url);
            let second = safe_file_name(&url);
            prop_assert_eq!(&first, &second);
            prop_assert!(
                first.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
            );
        }
    }

    // Joining a plain child segment onto a directory base keeps the base
    // as a prefix and the segment as the leaf.
    #[test]
    fn plain_segment_joins_under_base(segment in "[a-z0-9]{1,12}") {
        let base = Url::parse("http://example.com/dir/").expect("valid base");
        let resolved = resolve_reference(&base, &segment).expect("resolves");
        prop_assert_eq!(
            resolved.as_str(),
            format!("http://example.com/dir/{segment}")
        );
    }

    // Resolving an already-absolute reference ignores the base entirely.
    #[test]
    fn absolute_reference_ignores_base(host in "[a-z]{1,10}", leaf in "[a-z0-9]{1,12}") {
        let base = Url::parse("http://example.com/dir/").expect("valid base");
        let absolute = format!("http://{host}.example.net/{leaf}");
        let resolved = resolve_reference(&base, &absolute).expect("resolves");
        prop_assert_eq!(resolved.as_str(), absolute);
    }
}
