// Shared test helpers for database setup and inspection.

use sqlx::{Row, SqlitePool};
use std::path::Path;

/// Opens a pool on an existing database file created by a previous analysis.
#[allow(dead_code)] // Used by other test files
pub async fn open_pool(db_path: &Path) -> SqlitePool {
    let db_path_str = db_path.to_string_lossy().to_string();
    SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .expect("Failed to open test database")
}

/// Returns all (title, source_url, word, frequency) rows in insertion order.
#[allow(dead_code)]
pub async fn fetch_all_rows(pool: &SqlitePool) -> Vec<(String, String, String, i64)> {
    sqlx::query("SELECT title, source_url, word, frequency FROM page_words ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("Failed to query page_words")
        .into_iter()
        .map(|row| {
            (
                row.get::<String, _>("title"),
                row.get::<String, _>("source_url"),
                row.get::<String, _>("word"),
                row.get::<i64, _>("frequency"),
            )
        })
        .collect()
}

/// Returns the number of rows in the page_words table.
#[allow(dead_code)]
pub async fn count_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM page_words")
        .fetch_one(pool)
        .await
        .expect("Failed to count page_words rows")
}
