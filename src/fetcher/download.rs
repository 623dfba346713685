//! Single-resource download
//!
//! Streams a resource's bytes to a deterministic path under the
//! destination directory, overwriting whatever was there.

use std::path::Path;

use futures::StreamExt;
use log::debug;
use tokio::io::AsyncWriteExt;
use url::Url;

use super::FetchResult;
use super::errors::FetchError;
use crate::utils::safe_file_name;

/// Download `url` into `dest_dir` and return the written path.
///
/// The file name derives from the URL via [`safe_file_name`]; an existing
/// file at that path is overwritten (last writer wins). The body is
/// written chunk-by-chunk, never buffered whole.
pub async fn download(
    client: &reqwest::Client,
    url: &Url,
    dest_dir: &Path,
) -> Result<FetchResult, FetchError> {
    let local_path = dest_dir.join(safe_file_name(url));
    debug!("download start: {url}");

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let mut body = response.bytes_stream();

    let mut file = tokio::fs::File::create(&local_path).await?;
    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;

    debug!("download end: {url} -> {}", local_path.display());
    Ok(FetchResult {
        source: url.clone(),
        local_path,
    })
}
