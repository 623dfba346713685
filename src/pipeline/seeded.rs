//! Seeded crawl flow
//!
//! Expands a fixed set of seed pages into image links and downloads them
//! through the bounded fetcher. Extraction failures are isolated per seed,
//! download failures per link; the flow settles once every spawned fetch
//! completes.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use log::{error, info, warn};
use url::Url;

use super::PipelineError;
use crate::config::BridgeConfig;
use crate::fetcher::ConcurrentFetcher;
use crate::link_extractor::extract_image_links;

/// What a settled seeded crawl did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Links discovered and handed to the fetcher.
    pub attempted: usize,
    /// Downloads that completed with a written file.
    pub downloaded: usize,
}

/// Crawl every seed, download every discovered image link, and report
/// how it went. Per-item failures are logged and skipped.
pub async fn run_seeded_crawl(
    config: &BridgeConfig,
    seeds: &[Url],
) -> Result<CrawlSummary, PipelineError> {
    info!("starting seeded crawl over {} seeds", seeds.len());
    let fetcher = ConcurrentFetcher::new(config).await?;
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?;

    let mut tasks = FuturesUnordered::new();
    let mut attempted = 0usize;

    for seed in seeds {
        let links = match extract_image_links(&client, seed).await {
            Ok(links) => links,
            Err(e) => {
                warn!("link extraction failed for {seed}, skipping: {e}");
                continue;
            }
        };
        for link in links {
            attempted += 1;
            tasks.push(fetcher.spawn_fetch(link));
        }
    }

    let mut downloaded = 0usize;
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok(Some(_)) => downloaded += 1,
            Ok(None) => {}
            Err(e) => error!("fetch task panicked: {e}"),
        }
    }

    info!("seeded crawl settled: {downloaded}/{attempted} downloads succeeded");
    Ok(CrawlSummary {
        attempted,
        downloaded,
    })
}
