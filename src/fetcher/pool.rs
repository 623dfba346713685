//! Bounded concurrent fetcher
//!
//! One task per download, gated by a shared semaphore so fan-out stays
//! bounded no matter how many links the upstream stages discover. Each
//! task holds its permit through the settling delay, which throttles the
//! overall request rate against the source server.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use url::Url;

use super::FetchResult;
use super::download::download;
use super::errors::FetchError;
use crate::config::BridgeConfig;

pub struct ConcurrentFetcher {
    client: reqwest::Client,
    dest_dir: PathBuf,
    permits: Arc<Semaphore>,
    settle_delay: Duration,
}

/// Permit-gated download with the settling pause on success.
///
/// The permit is held through the pause, so the delay throttles the pool's
/// overall request rate, not just the one task.
async fn fetch_gated(
    client: &reqwest::Client,
    dest_dir: &Path,
    permits: &Semaphore,
    settle_delay: Duration,
    url: &Url,
) -> Result<FetchResult, FetchError> {
    let _permit = permits.acquire().await.map_err(|_| FetchError::PoolClosed)?;

    let result = download(client, url, dest_dir).await?;

    if !settle_delay.is_zero() {
        tokio::time::sleep(settle_delay).await;
    }
    Ok(result)
}

impl ConcurrentFetcher {
    /// Build a fetcher from config, creating the destination directory.
    pub async fn new(config: &BridgeConfig) -> Result<Self, FetchError> {
        tokio::fs::create_dir_all(config.download_dir()).await?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            dest_dir: config.download_dir().to_path_buf(),
            permits: Arc::new(Semaphore::new(config.max_concurrent_fetches())),
            settle_delay: config.settle_delay(),
        })
    }

    /// Fetch one resource, waiting for a concurrency permit first.
    ///
    /// Completes with the written path after the settling delay elapses.
    pub async fn fetch(&self, url: &Url) -> Result<FetchResult, FetchError> {
        fetch_gated(
            &self.client,
            &self.dest_dir,
            &self.permits,
            self.settle_delay,
            url,
        )
        .await
    }

    /// Fetch on a dedicated task with per-item failure isolation.
    ///
    /// A failing fetch is logged and yields `None`; it never terminates
    /// sibling fetches or the stream that spawned it.
    #[must_use]
    pub fn spawn_fetch(&self, url: Url) -> JoinHandle<Option<FetchResult>> {
        let client = self.client.clone();
        let dest_dir = self.dest_dir.clone();
        let permits = Arc::clone(&self.permits);
        let settle_delay = self.settle_delay;

        tokio::spawn(async move {
            match fetch_gated(&client, &dest_dir, &permits, settle_delay, &url).await {
                Ok(result) => {
                    debug!("fetched {url} -> {}", result.local_path.display());
                    Some(result)
                }
                Err(e) => {
                    warn!("fetch failed for {url}, skipping: {e}");
                    None
                }
            }
        })
    }
}
