//! Error types for download operations

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP transport error or non-success status
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Filesystem error writing the downloaded bytes
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The fetch pool's semaphore was closed mid-run
    #[error("fetch pool shut down")]
    PoolClosed,
}
