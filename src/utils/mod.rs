pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{is_http_url, parse_uri, resolve_reference, safe_file_name};
