//! Application initialization and resource setup.
//!
//! Initializes the shared resources the analysis needs:
//! - Logger with custom formatting
//! - HTTP client with timeouts and User-Agent

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
