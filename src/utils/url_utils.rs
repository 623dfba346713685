//! URI parsing, resolution, and filename derivation utilities.
//!
//! This module provides the leaf functions for working with URIs in the
//! context of link extraction and resource downloading.

use url::Url;

/// Parse an absolute URI from text.
///
/// Relative references fail here (`RelativeUrlWithoutBase`); use
/// [`resolve_reference`] when a base URI is available.
pub fn parse_uri(s: &str) -> Result<Url, url::ParseError> {
    Url::parse(s)
}

/// Resolve a reference URI against a base.
///
/// Follows RFC 3986 resolution rules: a relative reference is joined onto
/// the base, an already-absolute reference passes through unchanged.
pub fn resolve_reference(base: &Url, reference: &str) -> Result<Url, url::ParseError> {
    base.join(reference)
}

/// Check if a URL uses a fetchable scheme.
///
/// Skips data URLs, javascript URLs, and other non-http schemes.
#[must_use]
pub fn is_http_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Derive a filesystem-safe file name from a URL.
///
/// Every character outside `[A-Za-z0-9._]` is replaced with `_`. The
/// mapping is deterministic, so repeated downloads of the same URL land on
/// the same path; distinct URLs that sanitize identically are
/// last-writer-wins.
#[must_use]
pub fn safe_file_name(url: &Url) -> String {
    url.as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
