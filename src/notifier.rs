//! Outbound notifications
//!
//! Posts a text message to the configured webhook. One POST per call, no
//! batching, no retry; the pipeline isolates failures per call.

use log::debug;
use serde::Serialize;
use url::Url;

use crate::config::{BridgeConfig, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Webhook endpoint was not configured
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configured webhook endpoint did not parse as a URL
    #[error("invalid webhook endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The POST failed (transport error or non-success status)
    #[error("notification post failed: {0}")]
    Post(#[from] reqwest::Error),
}

/// Wire payload of one notification.
#[derive(Debug, Serialize)]
struct NotifyPayload<'a> {
    text: &'a str,
    channel: &'a str,
    username: &'a str,
    icon_emoji: &'a str,
}

/// Posts text messages to a fixed webhook endpoint.
///
/// Channel, username, and icon are configuration constants, not runtime
/// input.
pub struct OutboundNotifier {
    client: reqwest::Client,
    webhook_url: Url,
    channel: String,
    username: String,
    icon_emoji: String,
}

impl OutboundNotifier {
    /// Build a notifier, failing fast if the webhook is unconfigured.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, NotifyError> {
        let webhook_url = Url::parse(config.require_webhook()?)?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            webhook_url,
            channel: config.notify_channel().to_string(),
            username: config.notify_username().to_string(),
            icon_emoji: config.notify_icon().to_string(),
        })
    }

    /// Post one message. Any failure is scoped to this call.
    pub async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let payload = NotifyPayload {
            text,
            channel: &self.channel,
            username: &self.username,
            icon_emoji: &self.icon_emoji,
        };

        self.client
            .post(self.webhook_url.clone())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        debug!("notified: {text}");
        Ok(())
    }
}
