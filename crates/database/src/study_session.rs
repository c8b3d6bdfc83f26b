//! Study session browsing.
//!
//! Listing and detail queries across all sessions, unlike
//! [`crate::study_activity`] which scopes its listing to one activity.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Pagination, StudySessionDetail, Word};

/// Items returned per page when listing sessions or their words.
pub const ITEMS_PER_PAGE: i64 = 100;

/// Get one page of all study sessions, most recent first, with pagination
/// metadata.
///
/// Pages are 1-based; a page past the end yields an empty list, not an
/// error.
pub async fn list_study_sessions(
    pool: &SqlitePool,
    page: i64,
) -> Result<(Vec<StudySessionDetail>, Pagination)> {
    let offset = (page - 1) * ITEMS_PER_PAGE;

    let total_items = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM study_sessions
        "#,
    )
    .fetch_one(pool)
    .await?;

    let total_pages = (total_items + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE;

    let sessions = sqlx::query_as::<_, StudySessionDetail>(
        r#"
        SELECT
            ss.id,
            ss.group_id,
            g.name AS group_name,
            ss.study_activity_id,
            ss.created_at,
            (SELECT COUNT(*) FROM word_review_items wri WHERE wri.study_session_id = ss.id) AS review_items_count
        FROM study_sessions ss
        JOIN groups g ON ss.group_id = g.id
        ORDER BY ss.created_at DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(ITEMS_PER_PAGE)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let pagination = Pagination {
        current_page: page,
        total_pages,
        total_items,
        items_per_page: ITEMS_PER_PAGE,
    };

    Ok((sessions, pagination))
}

/// Get a study session by ID, with its group name and review count.
pub async fn get_study_session(pool: &SqlitePool, id: i64) -> Result<StudySessionDetail> {
    sqlx::query_as::<_, StudySessionDetail>(
        r#"
        SELECT
            ss.id,
            ss.group_id,
            g.name AS group_name,
            ss.study_activity_id,
            ss.created_at,
            (SELECT COUNT(*) FROM word_review_items wri WHERE wri.study_session_id = ss.id) AS review_items_count
        FROM study_sessions ss
        JOIN groups g ON ss.group_id = g.id
        WHERE ss.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "StudySession",
        id: id.to_string(),
    })
}

/// Get one page of the distinct words reviewed in a session.
///
/// The session must exist; a missing session is [`DatabaseError::NotFound`],
/// while a session with no reviews yields an empty page.
pub async fn list_session_words(
    pool: &SqlitePool,
    session_id: i64,
    page: i64,
) -> Result<(Vec<Word>, Pagination)> {
    get_study_session(pool, session_id).await?;

    let offset = (page - 1) * ITEMS_PER_PAGE;

    let total_items = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT word_id)
        FROM word_review_items
        WHERE study_session_id = ?
        "#,
    )
    .bind(session_id)
    .fetch_one(pool)
    .await?;

    let total_pages = (total_items + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE;

    let words = sqlx::query_as::<_, Word>(
        r#"
        SELECT DISTINCT w.id, w.japanese, w.romaji, w.english, w.parts,
               w.correct_count, w.wrong_count
        FROM words w
        JOIN word_review_items wri ON wri.word_id = w.id
        WHERE wri.study_session_id = ?
        ORDER BY w.id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(session_id)
    .bind(ITEMS_PER_PAGE)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let pagination = Pagination {
        current_page: page,
        total_pages,
        total_items,
        items_per_page: ITEMS_PER_PAGE,
    };

    Ok((words, pagination))
}
