//! Fluent builder for `BridgeConfig`
//!
//! Every field has a sensible default from `utils::constants`; callers set
//! only what differs. No field is required at build time; flows validate
//! the credentials they actually need when they start.

use std::path::PathBuf;
use std::time::Duration;

use super::types::BridgeConfig;
use crate::utils::{
    DEFAULT_CHANNEL_CAPACITY, DEFAULT_COMMAND_PREFIX, DEFAULT_DOWNLOAD_DIR,
    DEFAULT_HANDSHAKE_URL, DEFAULT_IMAGE_EXTENSION, DEFAULT_MAX_CONCURRENT_FETCHES,
    DEFAULT_NOTIFY_CHANNEL, DEFAULT_NOTIFY_ICON, DEFAULT_NOTIFY_LIMIT, DEFAULT_NOTIFY_USERNAME,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_MS,
};

pub struct BridgeConfigBuilder {
    api_token: Option<String>,
    webhook_url: Option<String>,
    handshake_url: String,
    download_dir: PathBuf,
    command_prefix: String,
    image_extension: String,
    notify_limit: usize,
    max_concurrent_fetches: usize,
    settle_delay: Duration,
    request_timeout: Duration,
    channel_capacity: usize,
    notify_channel: String,
    notify_username: String,
    notify_icon: String,
}

impl BridgeConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_token: None,
            webhook_url: None,
            handshake_url: DEFAULT_HANDSHAKE_URL.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            notify_limit: DEFAULT_NOTIFY_LIMIT,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            notify_channel: DEFAULT_NOTIFY_CHANNEL.to_string(),
            notify_username: DEFAULT_NOTIFY_USERNAME.to_string(),
            notify_icon: DEFAULT_NOTIFY_ICON.to_string(),
        }
    }

    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Override the handshake endpoint (self-hosted services, tests).
    #[must_use]
    pub fn handshake_url(mut self, url: impl Into<String>) -> Self {
        self.handshake_url = url.into();
        self
    }

    #[must_use]
    pub fn download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    #[must_use]
    pub fn command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extension = extension.into();
        self
    }

    #[must_use]
    pub fn notify_limit(mut self, limit: usize) -> Self {
        self.notify_limit = limit;
        self
    }

    /// Bound on simultaneous in-flight downloads. Clamped to at least 1.
    #[must_use]
    pub fn max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Ring capacity of the broadcast channel. Clamped to at least 1.
    #[must_use]
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn notify_channel(mut self, channel: impl Into<String>) -> Self {
        self.notify_channel = channel.into();
        self
    }

    #[must_use]
    pub fn notify_username(mut self, username: impl Into<String>) -> Self {
        self.notify_username = username.into();
        self
    }

    #[must_use]
    pub fn notify_icon(mut self, icon: impl Into<String>) -> Self {
        self.notify_icon = icon.into();
        self
    }

    #[must_use]
    pub fn build(self) -> BridgeConfig {
        BridgeConfig {
            api_token: self.api_token,
            webhook_url: self.webhook_url,
            handshake_url: self.handshake_url,
            download_dir: self.download_dir,
            command_prefix: self.command_prefix,
            image_extension: self.image_extension,
            notify_limit: self.notify_limit,
            max_concurrent_fetches: self.max_concurrent_fetches,
            settle_delay: self.settle_delay,
            request_timeout: self.request_timeout,
            channel_capacity: self.channel_capacity,
            notify_channel: self.notify_channel,
            notify_username: self.notify_username,
            notify_icon: self.notify_icon,
        }
    }
}

impl Default for BridgeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
