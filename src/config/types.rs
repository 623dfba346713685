//! Core configuration types for the bridge
//!
//! This module contains the main `BridgeConfig` struct describing one
//! bridge deployment: credentials, endpoints, and pipeline tuning knobs.

use std::path::PathBuf;
use std::time::Duration;

/// Errors raised when required configuration is absent or malformed.
///
/// Both flows fail fast with one of these before any network work starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Auth token for the chat service handshake is not set
    #[error("auth token is not configured (set SLACK_TOKEN)")]
    MissingToken,

    /// Webhook endpoint for outbound notifications is not set
    #[error("webhook endpoint is not configured (set SLACK_WEBHOOK_URL)")]
    MissingWebhook,
}

/// Main configuration struct for a bridge run.
///
/// Construct via [`BridgeConfig::builder`] or [`BridgeConfig::from_env`].
/// The token and webhook are optional at build time; the flow that needs a
/// missing one fails fast with a [`ConfigError`] when it starts.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Auth token presented on the handshake request.
    pub(crate) api_token: Option<String>,
    /// Webhook endpoint for outbound notifications.
    pub(crate) webhook_url: Option<String>,
    /// One-shot handshake endpoint that yields the socket endpoint.
    pub(crate) handshake_url: String,
    /// Destination directory for downloaded resources.
    pub(crate) download_dir: PathBuf,
    /// Prefix that marks a chat message as a crawl command.
    pub(crate) command_prefix: String,
    /// Case-insensitive path suffix a link must carry to be reported.
    pub(crate) image_extension: String,
    /// Cap on links reported back per chat command.
    pub(crate) notify_limit: usize,
    /// Bound on simultaneous in-flight downloads.
    pub(crate) max_concurrent_fetches: usize,
    /// Flat pause after each successful download.
    pub(crate) settle_delay: Duration,
    /// Timeout on every outbound HTTP request.
    pub(crate) request_timeout: Duration,
    /// Ring capacity of the live-message broadcast channel.
    pub(crate) channel_capacity: usize,
    /// Fixed channel name attached to outbound notifications.
    pub(crate) notify_channel: String,
    /// Fixed username attached to outbound notifications.
    pub(crate) notify_username: String,
    /// Fixed icon attached to outbound notifications.
    pub(crate) notify_icon: String,
}

impl BridgeConfig {
    /// Start building a config with all defaults.
    #[must_use]
    pub fn builder() -> super::builder::BridgeConfigBuilder {
        super::builder::BridgeConfigBuilder::new()
    }

    /// Build a config from the process environment.
    ///
    /// Reads `SLACK_TOKEN` and `SLACK_WEBHOOK_URL`; everything else keeps
    /// its default. Absent variables leave the corresponding field unset;
    /// the dependent flow reports the gap when it starts.
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Ok(token) = std::env::var("SLACK_TOKEN") {
            builder = builder.api_token(token);
        }
        if let Ok(webhook) = std::env::var("SLACK_WEBHOOK_URL") {
            builder = builder.webhook_url(webhook);
        }
        builder.build()
    }

    /// The auth token, or the error a flow should fail fast with.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.api_token.as_deref().ok_or(ConfigError::MissingToken)
    }

    /// The webhook endpoint, or the error a flow should fail fast with.
    pub fn require_webhook(&self) -> Result<&str, ConfigError> {
        self.webhook_url
            .as_deref()
            .ok_or(ConfigError::MissingWebhook)
    }
}
