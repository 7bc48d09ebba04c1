//! Configuration constants.
//!
//! Defaults used by the CLI and the library `Config`.

/// Default SQLite database path.
pub const DB_PATH: &str = "./page_words.db";

/// Default number of top words to rank and report.
pub const DEFAULT_TOP_N: usize = 10;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// A generic Chrome-like string; some hosts (Project Gutenberg included)
/// reject requests with no browser User-Agent. Override via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum accepted URL length, matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;
