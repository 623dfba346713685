// linkrelay: chat-driven link crawl bridge.
//
// Two modes:
//   linkrelay chat              stream chat commands, report image links
//   linkrelay crawl <url>...    crawl seed pages, download image links

use anyhow::{Context, Result, bail};
use linkrelay::config::BridgeConfig;
use linkrelay::pipeline::{run_chat_flow, run_seeded_crawl};
use linkrelay::utils::parse_uri;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BridgeConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("chat") => {
            let state = run_chat_flow(&config)
                .await
                .context("chat flow failed")?;
            info!("chat flow ended: {state:?}");
        }
        Some("crawl") => {
            let seeds = args[1..]
                .iter()
                .map(|raw| parse_uri(raw).with_context(|| format!("invalid seed url: {raw}")))
                .collect::<Result<Vec<_>>>()?;
            if seeds.is_empty() {
                bail!("crawl mode needs at least one seed url");
            }
            let summary = run_seeded_crawl(&config, &seeds)
                .await
                .context("seeded crawl failed")?;
            info!(
                "downloaded {}/{} discovered links",
                summary.downloaded, summary.attempted
            );
        }
        Some(other) => bail!("unknown mode: {other} (expected 'chat' or 'crawl')"),
    }

    Ok(())
}
