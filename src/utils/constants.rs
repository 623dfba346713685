//! Shared configuration constants for linkrelay
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default handshake endpoint for the chat service.
///
/// A one-shot authenticated GET here returns the socket endpoint for the
/// persistent connection. Override via `handshake_url` for self-hosted
/// services or tests.
pub const DEFAULT_HANDSHAKE_URL: &str = "https://slack.com/api/rtm.start";

/// Command prefix that marks a chat message as a crawl request.
pub const DEFAULT_COMMAND_PREFIX: &str = "get-image";

/// Image extension filter applied to extracted links in the chat flow.
///
/// Compared case-insensitively against the end of the link's path.
pub const DEFAULT_IMAGE_EXTENSION: &str = ".jpg";

/// Maximum number of links reported back per chat command.
pub const DEFAULT_NOTIFY_LIMIT: usize = 2;

/// Default bound on simultaneous in-flight downloads.
///
/// Sized for small deployments; raise for fast links, lower for servers
/// that rate-limit aggressively.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

/// Settling delay after each successful download, in milliseconds.
///
/// A flat per-item pause that throttles request rate against the source
/// server. Set to zero to disable (tests do).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Timeout applied to every outbound HTTP request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Ring capacity of the live-message broadcast channel.
///
/// A subscriber that falls more than this many messages behind observes a
/// lag gap; the producer never blocks.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Download destination directory, relative to the working directory.
pub const DEFAULT_DOWNLOAD_DIR: &str = "download";

/// Fixed channel for outbound notifications.
pub const DEFAULT_NOTIFY_CHANNEL: &str = "#general";

/// Fixed username for outbound notifications.
pub const DEFAULT_NOTIFY_USERNAME: &str = "linkrelay-bot";

/// Fixed icon for outbound notifications.
pub const DEFAULT_NOTIFY_ICON: &str = ":monkey_face:";
