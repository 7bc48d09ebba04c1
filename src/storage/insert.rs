//! Database schema setup and insert operations.
//!
//! The `page_words` table is append-only: one row per ranked word per
//! analysis, with no uniqueness constraint. All inserts use parameterized
//! queries.

use chrono::Utc;
use log::info;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::rank::RankedEntry;

/// Creates the `page_words` table if it doesn't exist.
///
/// Idempotent; runs on every invocation before any insert.
pub async fn setup_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS page_words (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            source_url TEXT,
            word TEXT,
            frequency INTEGER,
            fetched_at INTEGER
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Appends one row per ranked entry, all in a single transaction.
///
/// Either every entry is persisted or none is; a failure mid-way rolls the
/// transaction back.
pub async fn insert_word_counts(
    pool: &SqlitePool,
    title: &str,
    source_url: &str,
    entries: &[RankedEntry],
) -> Result<(), DatabaseError> {
    let fetched_at = Utc::now().timestamp_millis();

    let mut tx = pool.begin().await?;
    for entry in entries {
        sqlx::query(
            "INSERT INTO page_words (title, source_url, word, frequency, fetched_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(source_url)
        .bind(&entry.word)
        .bind(entry.count as i64)
        .bind(fetched_at)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Saved {} word rows for {source_url}", entries.len());
    Ok(())
}
