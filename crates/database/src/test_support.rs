//! Shared helpers for module tests.

use sqlx::SqlitePool;

use crate::{migration, Database};

/// Fresh in-memory database with the base schema and extension applied.
///
/// A single connection keeps the in-memory database alive for the whole
/// test.
pub(crate) async fn test_db() -> Database {
    let db = Database::connect_with_pool_size("sqlite::memory:", 1)
        .await
        .unwrap();
    db.migrate().await.unwrap();
    migration::run(db.pool()).await.unwrap();
    db
}

/// Insert a word directly and return its id.
pub(crate) async fn seed_word(
    pool: &SqlitePool,
    japanese: &str,
    romaji: &str,
    english: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO words (japanese, romaji, english) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(japanese)
    .bind(romaji)
    .bind(english)
    .fetch_one(pool)
    .await
    .unwrap()
}
