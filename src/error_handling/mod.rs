//! Error handling.
//!
//! Typed errors for each collaborator (initialization, fetch, persistence)
//! and the top-level [`AnalysisError`] returned by `run_analysis`.

mod types;

pub use types::{AnalysisError, DatabaseError, FetchError, InitializationError};
