//! Embedded-link extraction
//!
//! Fetches a page and produces the image references it embeds, resolved to
//! absolute URIs in document order. Each call performs a fresh fetch; the
//! result is finite and not restartable.

use log::{debug, info};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::utils::resolve_reference;

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("hardcoded CSS selector 'img' is valid"));

/// Errors from fetching or reading a page.
///
/// A failure here is a stream error for the whole document; the caller
/// decides whether to isolate it (the pipeline does, per item).
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Fetching the document failed (transport error or non-success status)
    #[error("failed to fetch document: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Fetch `page_url` and return its embedded image URIs in document order.
///
/// Relative references are resolved against `page_url`; absolute ones pass
/// through unchanged. A `src` attribute that does not resolve is a local
/// decode error: logged and skipped, not fatal to the document.
pub async fn extract_image_links(
    client: &reqwest::Client,
    page_url: &Url,
) -> Result<Vec<Url>, ExtractError> {
    info!("extracting image links from {page_url}");
    let body = client
        .get(page_url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(collect_image_refs(&body, page_url))
}

/// Parse markup and resolve every `img src` against the base.
///
/// Split out of the fetch so parsing is testable without a server, and so
/// the non-`Send` DOM never lives across an await point.
#[must_use]
pub fn collect_image_refs(body: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(body);
    let mut links = Vec::new();

    for element in document.select(&IMG_SELECTOR) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };
        match resolve_reference(base, src) {
            Ok(resolved) => links.push(resolved),
            Err(e) => debug!("skipping unresolvable image reference {src:?}: {e}"),
        }
    }

    debug!("found {} image references in {base}", links.len());
    links
}
