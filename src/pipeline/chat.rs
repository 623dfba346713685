//! Chat-triggered flow
//!
//! Drives the live message stream: command messages are expanded into
//! image links, filtered by extension, capped, and reported back through
//! the notifier. Runs until the connection closes.

use log::{debug, info, warn};
use tokio_stream::StreamExt;

use super::message_filter::{extract_uri_token, has_image_extension, parse_absolute_http_uri};
use super::{PipelineError, RunState};
use crate::chat_source::LiveMessageSource;
use crate::config::BridgeConfig;
use crate::link_extractor::extract_image_links;
use crate::notifier::OutboundNotifier;

/// Connect and stream until the connection closes.
///
/// Returns `Ok(RunState::Closed)` on a normal server close; a handshake or
/// setup failure returns the flow-fatal error instead (no `Streaming`
/// state is ever entered).
pub async fn run_chat_flow(config: &BridgeConfig) -> Result<RunState, PipelineError> {
    info!("connecting to chat service");
    let source = LiveMessageSource::connect(config).await?;
    let notifier = OutboundNotifier::from_config(config)?;
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?;

    info!("streaming chat messages");
    let mut messages = source.message_stream();
    while let Some(message) = messages.next().await {
        handle_message(&message, config, &client, &notifier).await;
    }

    info!("chat stream closed");
    source.close().await;
    Ok(RunState::Closed)
}

/// Process one chat message end to end.
///
/// Every early return here is per-item isolation: the message is dropped
/// and the stream moves on.
async fn handle_message(
    message: &str,
    config: &BridgeConfig,
    client: &reqwest::Client,
    notifier: &OutboundNotifier,
) {
    if !message.starts_with(config.command_prefix()) {
        return;
    }

    let Some(token) = extract_uri_token(message) else {
        debug!("command carried no uri token: {message:?}");
        return;
    };
    let Some(page) = parse_absolute_http_uri(token) else {
        return;
    };

    let links = match extract_image_links(client, &page).await {
        Ok(links) => links,
        Err(e) => {
            warn!("link extraction failed for {page}, skipping: {e}");
            return;
        }
    };

    let mut qualifying = tokio_stream::iter(links)
        .filter(|link| has_image_extension(link, config.image_extension()))
        .take(config.notify_limit());

    while let Some(link) = qualifying.next().await {
        if let Err(e) = notifier.notify(link.as_str()).await {
            warn!("notification failed for {link}: {e}");
        }
    }
}
