pub mod chat_source;
pub mod config;
pub mod fetcher;
pub mod link_extractor;
pub mod notifier;
pub mod pipeline;
pub mod utils;

pub use chat_source::{ChatSourceError, LiveMessageSource};
pub use config::{BridgeConfig, ConfigError};
pub use fetcher::{ConcurrentFetcher, FetchError, FetchResult};
pub use link_extractor::{ExtractError, extract_image_links};
pub use notifier::{NotifyError, OutboundNotifier};
pub use pipeline::{
    CrawlSummary, PipelineError, RunState, run_chat_flow, run_seeded_crawl,
};
pub use utils::{is_http_url, parse_uri, resolve_reference, safe_file_name};
