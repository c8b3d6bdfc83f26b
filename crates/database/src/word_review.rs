//! Word review recording.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::WordReviewItem;

/// Record a review outcome for a word within a session.
///
/// Inserts the review item and bumps the word's correct/wrong counter in
/// one transaction. Both references are validated first; a missing session
/// or word fails with [`DatabaseError::InvalidReference`].
pub async fn record_review(
    pool: &SqlitePool,
    session_id: i64,
    word_id: i64,
    correct: bool,
) -> Result<WordReviewItem> {
    let session_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM study_sessions WHERE id = ?)
        "#,
    )
    .bind(session_id)
    .fetch_one(pool)
    .await?;
    if !session_exists {
        return Err(DatabaseError::InvalidReference {
            entity: "StudySession",
            id: session_id,
        });
    }

    let word_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM words WHERE id = ?)
        "#,
    )
    .bind(word_id)
    .fetch_one(pool)
    .await?;
    if !word_exists {
        return Err(DatabaseError::InvalidReference {
            entity: "Word",
            id: word_id,
        });
    }

    let mut tx = pool.begin().await?;

    let review = sqlx::query_as::<_, WordReviewItem>(
        r#"
        INSERT INTO word_review_items (word_id, study_session_id, correct, created_at)
        VALUES (?, ?, ?, CURRENT_TIMESTAMP)
        RETURNING id, word_id, study_session_id, correct, created_at
        "#,
    )
    .bind(word_id)
    .bind(session_id)
    .bind(correct)
    .fetch_one(&mut *tx)
    .await?;

    let counter = if correct { "correct_count" } else { "wrong_count" };
    sqlx::query(&format!(
        "UPDATE words SET {counter} = {counter} + 1 WHERE id = ?"
    ))
    .bind(word_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(review)
}

/// List the reviews recorded for a session, oldest first.
pub async fn list_session_reviews(
    pool: &SqlitePool,
    session_id: i64,
) -> Result<Vec<WordReviewItem>> {
    let reviews = sqlx::query_as::<_, WordReviewItem>(
        r#"
        SELECT id, word_id, study_session_id, correct, created_at
        FROM word_review_items
        WHERE study_session_id = ?
        ORDER BY id
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}
