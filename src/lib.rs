//! page_words library: fetch a web page, rank its words, persist the result.
//!
//! The core of the crate is a single-pass, tag-aware word frequency extractor:
//! the [`scan`] module walks a markup document once, separating title text
//! from body text and emitting filtered tokens, and the [`rank`] module turns
//! the token stream into a deterministic top-N ranking. Around that core sit
//! thin collaborators for fetching (reqwest), persistence (SQLite via sqlx),
//! and report formatting.
//!
//! # Example
//!
//! ```no_run
//! use page_words::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://www.gutenberg.org/files/2701/2701-h/2701-h.htm".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(config).await?;
//! println!("{}: {} ranked words", report.title, report.entries.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod rank;
pub mod report;
pub mod scan;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, DatabaseError, FetchError, InitializationError};
pub use rank::{top_words, RankedEntry};
pub use run::{run_analysis, AnalysisReport};
pub use scan::{scan_document, ScanOutcome};

// Internal run module (contains the main orchestration logic)
mod run {
    use std::path::PathBuf;

    use log::info;

    use crate::app::validate_and_normalize_url;
    use crate::config::Config;
    use crate::error_handling::{AnalysisError, FetchError};
    use crate::fetch::fetch_document;
    use crate::initialization::init_client;
    use crate::rank::{top_words, RankedEntry};
    use crate::scan::scan_document;
    use crate::storage::{init_db_pool_with_path, insert_word_counts, setup_schema};

    /// Results of one completed page analysis.
    #[derive(Debug, Clone)]
    pub struct AnalysisReport {
        /// The extracted page title (empty if the page has none).
        pub title: String,
        /// The normalized URL that was fetched.
        pub url: String,
        /// Ranked words, count descending, ties by first occurrence.
        pub entries: Vec<RankedEntry>,
        /// The requested ranking size (the table may hold fewer entries).
        pub top_n: usize,
        /// Path to the SQLite database containing the appended rows.
        pub db_path: PathBuf,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a full page analysis with the provided configuration.
    ///
    /// This is the main entry point for the library. It fetches the page,
    /// scans it for the title and filtered body tokens, ranks the tokens by
    /// frequency, persists one row per ranked word, and returns the report.
    ///
    /// There is no partial-result state: on any error nothing is persisted
    /// and the error is returned for the presentation layer to render.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Fetch`] if the URL is invalid or the request fails
    /// - [`AnalysisError::Persistence`] if the database cannot be opened or
    ///   written
    /// - [`AnalysisError::Initialization`] if the HTTP client cannot be built
    pub async fn run_analysis(config: Config) -> Result<AnalysisReport, AnalysisError> {
        let url = validate_and_normalize_url(&config.url)
            .ok_or_else(|| FetchError::InvalidUrl(config.url.clone()))?;

        let pool = init_db_pool_with_path(&config.db_path).await?;
        setup_schema(&pool).await?;

        let client = init_client(&config)?;

        let start = std::time::Instant::now();
        let body = fetch_document(&client, &url).await.map_err(AnalysisError::Fetch)?;

        let outcome = scan_document(&body);
        info!(
            "Scanned {}: title '{}', {} body tokens",
            url,
            outcome.title,
            outcome.tokens.len()
        );

        let entries = top_words(&outcome.tokens, config.top_n);
        info!("Ranked top {} of the distinct words", entries.len());

        insert_word_counts(&pool, &outcome.title, &url, &entries).await?;

        Ok(AnalysisReport {
            title: outcome.title,
            url,
            entries,
            top_n: config.top_n,
            db_path: config.db_path.clone(),
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
