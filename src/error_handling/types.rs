//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! There is deliberately no error type for the markup scanner: it accepts
//! arbitrary text and has no failure path.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for fetching the source document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input URL is empty, malformed, or uses an unsupported scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request failed (connection, timeout, non-success status, or
    /// body read failure).
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Top-level error returned by the analysis orchestration.
///
/// The presentation layer renders this as a message; nothing is persisted
/// when any variant is returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Could not fetch the source document.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Could not persist the results.
    #[error("Persistence error: {0}")]
    Persistence(#[from] DatabaseError),

    /// Could not initialize a required resource.
    #[error("Initialization error: {0}")]
    Initialization(#[from] InitializationError),
}
