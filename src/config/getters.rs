//! Getter methods for `BridgeConfig`

use std::path::Path;
use std::time::Duration;

use super::types::BridgeConfig;

impl BridgeConfig {
    #[must_use]
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    #[must_use]
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    #[must_use]
    pub fn handshake_url(&self) -> &str {
        &self.handshake_url
    }

    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    #[must_use]
    pub fn command_prefix(&self) -> &str {
        &self.command_prefix
    }

    #[must_use]
    pub fn image_extension(&self) -> &str {
        &self.image_extension
    }

    #[must_use]
    pub fn notify_limit(&self) -> usize {
        self.notify_limit
    }

    #[must_use]
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    #[must_use]
    pub fn notify_channel(&self) -> &str {
        &self.notify_channel
    }

    #[must_use]
    pub fn notify_username(&self) -> &str {
        &self.notify_username
    }

    #[must_use]
    pub fn notify_icon(&self) -> &str {
        &self.notify_icon
    }
}
