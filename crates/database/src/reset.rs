//! Destructive reset operations.

use sqlx::SqlitePool;

use crate::Result;

/// Delete all study history: review items and study sessions.
///
/// Words, groups, and their links are left intact. Runs in one
/// transaction.
pub async fn reset_history(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM word_review_items")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM study_sessions")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Study history reset");
    Ok(())
}

/// Delete all data: history, word-group links, words, and groups.
///
/// Runs in one transaction, child tables first so foreign keys hold
/// throughout.
pub async fn reset_full(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM word_review_items")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM study_sessions")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM words_groups")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM words")
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM groups")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Full system reset");
    Ok(())
}
