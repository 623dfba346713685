//! Chat-message filtering and URI token extraction
//!
//! The chat service posts URIs wrapped in angle brackets; these helpers
//! pull the first such token out of a command message and keep only the
//! absolute http(s) URIs. A token that fails any step is dropped: a
//! decode error local to one message, never fatal.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::utils::{is_http_url, parse_uri};

static URI_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([^<>]+)>").expect("hardcoded uri token regex is valid"));

/// Extract the first angle-bracket-delimited token from message text.
#[must_use]
pub fn extract_uri_token(text: &str) -> Option<&str> {
    URI_TOKEN_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

/// Parse a token as an absolute http(s) URI, dropping anything else.
#[must_use]
pub fn parse_absolute_http_uri(token: &str) -> Option<Url> {
    match parse_uri(token) {
        Ok(url) if is_http_url(&url) => Some(url),
        Ok(url) => {
            debug!("ignoring non-http uri: {url}");
            None
        }
        Err(e) => {
            debug!("ignoring unparseable uri token {token:?}: {e}");
            None
        }
    }
}

/// Does the link's path end with the given extension (case-insensitive)?
#[must_use]
pub fn has_image_extension(url: &Url, extension: &str) -> bool {
    url.path()
        .to_ascii_lowercase()
        .ends_with(&extension.to_ascii_lowercase())
}
