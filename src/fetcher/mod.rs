//! Concurrent, failure-isolated resource downloading

use std::path::PathBuf;

use url::Url;

pub mod download;
pub mod errors;
pub mod pool;

pub use errors::FetchError;
pub use pool::ConcurrentFetcher;

/// A successfully downloaded resource.
///
/// Failures never appear as values; they are side-channel log events only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The resource URI the bytes came from.
    pub source: Url,
    /// Where the bytes landed on disk.
    pub local_path: PathBuf,
}
