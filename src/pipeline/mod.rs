//! Pipeline orchestration
//!
//! Composes the source, extractor, fetcher, and notifier into the two
//! bridge flows:
//!
//! - **seeded crawl**: a fixed seed set is expanded into image links and
//!   downloaded, failures isolated per item ([`run_seeded_crawl`]).
//! - **chat-triggered**: live chat messages carrying a crawl command are
//!   expanded into image links and reported back ([`run_chat_flow`]).
//!
//! Errors local to one item never cross their composition boundary; errors
//! that threaten the whole stream surface in the flow's `Result`.

pub mod chat;
pub mod message_filter;
pub mod seeded;

pub use chat::run_chat_flow;
pub use message_filter::{extract_uri_token, has_image_extension, parse_absolute_http_uri};
pub use seeded::{CrawlSummary, run_seeded_crawl};

use crate::chat_source::ChatSourceError;
use crate::fetcher::FetchError;
use crate::notifier::NotifyError;

/// Lifecycle of one pipeline run.
///
/// `Connecting` fails terminally if the handshake fails; `Streaming`
/// persists until the connection closes (`Closed`, normal) or an error
/// escapes isolation (`Failed`, reported as the flow's `Err`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Connecting,
    Streaming,
    Closed,
    Failed,
}

/// Flow-fatal errors: anything that stops a whole run rather than one item.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Establishing the live connection failed
    #[error("live connection failed: {0}")]
    ChatSource(#[from] ChatSourceError),

    /// The notifier could not be constructed
    #[error("notifier unavailable: {0}")]
    Notify(#[from] NotifyError),

    /// The fetch pool could not be constructed
    #[error("fetch pool unavailable: {0}")]
    Fetch(#[from] FetchError),

    /// Building an HTTP client failed
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}
