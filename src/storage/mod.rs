//! Persistence layer.
//!
//! SQLite-backed storage for analysis results: pool initialization, schema
//! setup, and append-only inserts.

mod insert;
mod pool;

pub use insert::{insert_word_counts, setup_schema};
pub use pool::init_db_pool_with_path;
