//! Study activity queries and session creation.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{ActivitySession, Pagination, StudyActivity, StudyActivityDetail, StudySession};

/// Sessions returned per page when listing an activity's sessions.
pub const SESSIONS_PER_PAGE: i64 = 100;

/// Static activity description until per-activity copy exists.
const ACTIVITY_DESCRIPTION: &str = "Practice your vocabulary with flashcards";

/// Get a study activity by ID, with its thumbnail resolved to an empty
/// string when unset.
pub async fn get_study_activity(pool: &SqlitePool, id: i64) -> Result<StudyActivityDetail> {
    sqlx::query_as::<_, StudyActivityDetail>(
        r#"
        SELECT id, name, COALESCE(thumbnail_url, '') AS thumbnail_url,
               ? AS description
        FROM study_activities
        WHERE id = ?
        "#,
    )
    .bind(ACTIVITY_DESCRIPTION)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "StudyActivity",
        id: id.to_string(),
    })
}

/// List all study activities.
pub async fn list_study_activities(pool: &SqlitePool) -> Result<Vec<StudyActivity>> {
    let activities = sqlx::query_as::<_, StudyActivity>(
        r#"
        SELECT id, name, thumbnail_url
        FROM study_activities
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(activities)
}

/// Get one page of an activity's study sessions, most recent first, with
/// pagination metadata.
///
/// Pages are 1-based and [`SESSIONS_PER_PAGE`] long. A page past the end
/// yields an empty list, not an error. Start and end time are reported as
/// equal since session duration is not tracked.
pub async fn list_activity_sessions(
    pool: &SqlitePool,
    activity_id: i64,
    page: i64,
) -> Result<(Vec<ActivitySession>, Pagination)> {
    let offset = (page - 1) * SESSIONS_PER_PAGE;

    let total_items = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM study_sessions
        WHERE study_activity_id = ?
        "#,
    )
    .bind(activity_id)
    .fetch_one(pool)
    .await?;

    let total_pages = (total_items + SESSIONS_PER_PAGE - 1) / SESSIONS_PER_PAGE;

    let sessions = sqlx::query_as::<_, ActivitySession>(
        r#"
        SELECT
            ss.id,
            sa.name AS activity_name,
            g.name AS group_name,
            ss.created_at AS start_time,
            ss.created_at AS end_time,
            (SELECT COUNT(*) FROM word_review_items wri WHERE wri.study_session_id = ss.id) AS review_items_count
        FROM study_sessions ss
        JOIN study_activities sa ON ss.study_activity_id = sa.id
        JOIN groups g ON ss.group_id = g.id
        WHERE ss.study_activity_id = ?
        ORDER BY ss.created_at DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(activity_id)
    .bind(SESSIONS_PER_PAGE)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let pagination = Pagination {
        current_page: page,
        total_pages,
        total_items,
        items_per_page: SESSIONS_PER_PAGE,
    };

    Ok((sessions, pagination))
}

/// Create a study session for a group and activity.
///
/// Both references are checked before inserting, group first; a missing
/// reference fails with [`DatabaseError::InvalidReference`] naming the
/// offending entity, and nothing is inserted. The creation timestamp is
/// assigned by the store.
pub async fn create_study_session(
    pool: &SqlitePool,
    group_id: i64,
    activity_id: i64,
) -> Result<StudySession> {
    verify_group_and_activity(pool, group_id, activity_id).await?;

    let session = sqlx::query_as::<_, StudySession>(
        r#"
        INSERT INTO study_sessions (group_id, study_activity_id, created_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        RETURNING id, group_id, created_at, study_activity_id
        "#,
    )
    .bind(group_id)
    .bind(activity_id)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Check that the referenced group and activity exist, group first.
///
/// Not run in a transaction with the subsequent insert; a row deleted
/// between check and insert can slip through.
async fn verify_group_and_activity(
    pool: &SqlitePool,
    group_id: i64,
    activity_id: i64,
) -> Result<()> {
    let group_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?)
        "#,
    )
    .bind(group_id)
    .fetch_one(pool)
    .await?;
    if !group_exists {
        return Err(DatabaseError::InvalidReference {
            entity: "Group",
            id: group_id,
        });
    }

    let activity_exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM study_activities WHERE id = ?)
        "#,
    )
    .bind(activity_id)
    .fetch_one(pool)
    .await?;
    if !activity_exists {
        return Err(DatabaseError::InvalidReference {
            entity: "StudyActivity",
            id: activity_id,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn get_activity_resolves_thumbnail() {
        let db = test_db().await;

        let activity = get_study_activity(db.pool(), 1).await.unwrap();
        assert_eq!(activity.id, 1);
        assert_eq!(activity.name, "Vocabulary Quiz");
        assert_eq!(activity.thumbnail_url, "https://example.com/quiz-thumbnail.jpg");
        assert_eq!(activity.description, ACTIVITY_DESCRIPTION);
    }

    #[tokio::test]
    async fn get_activity_not_found() {
        let db = test_db().await;

        let result = get_study_activity(db.pool(), 9999).await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: "StudyActivity", .. })
        ));
    }

    #[tokio::test]
    async fn get_activity_missing_thumbnail_is_empty_string() {
        let db = test_db().await;
        let pool = db.pool();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO study_activities (name) VALUES ('Listening Drill') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();

        let activity = get_study_activity(pool, id).await.unwrap();
        assert_eq!(activity.thumbnail_url, "");
    }

    #[tokio::test]
    async fn create_session_returns_populated_record() {
        let db = test_db().await;
        let pool = db.pool();

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let session = create_study_session(pool, group.id, 1).await.unwrap();

        assert!(session.id > 0);
        assert_eq!(session.group_id, group.id);
        assert_eq!(session.study_activity_id, 1);
        assert!(!session.created_at.is_empty());
    }

    #[tokio::test]
    async fn create_session_rejects_missing_group() {
        let db = test_db().await;

        let result = create_study_session(db.pool(), 9999, 1).await;
        assert!(matches!(
            result,
            Err(DatabaseError::InvalidReference { entity: "Group", id: 9999 })
        ));
    }

    #[tokio::test]
    async fn create_session_rejects_missing_activity_and_inserts_nothing() {
        let db = test_db().await;
        let pool = db.pool();

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let result = create_study_session(pool, group.id, 9999).await;
        assert!(matches!(
            result,
            Err(DatabaseError::InvalidReference { entity: "StudyActivity", id: 9999 })
        ));

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM study_sessions")
            .fetch_one(pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn session_listing_paginates() {
        let db = test_db().await;
        let pool = db.pool();

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        for _ in 0..250 {
            create_study_session(pool, group.id, 1).await.unwrap();
        }
        // Sessions for another activity must not leak into the listing.
        create_study_session(pool, group.id, 2).await.unwrap();

        let (sessions, pagination) = list_activity_sessions(pool, 1, 1).await.unwrap();
        assert_eq!(sessions.len(), 100);
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.total_items, 250);
        assert_eq!(pagination.items_per_page, 100);
        assert_eq!(sessions[0].activity_name, "Vocabulary Quiz");
        assert_eq!(sessions[0].group_name, "Animals");
        assert_eq!(sessions[0].start_time, sessions[0].end_time);

        let (sessions, _) = list_activity_sessions(pool, 1, 3).await.unwrap();
        assert_eq!(sessions.len(), 50);

        let (sessions, pagination) = list_activity_sessions(pool, 1, 4).await.unwrap();
        assert!(sessions.is_empty());
        assert_eq!(pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn session_listing_counts_review_items() {
        let db = test_db().await;
        let pool = db.pool();

        let word = crate::test_support::seed_word(pool, "犬", "inu", "dog").await;
        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let session = create_study_session(pool, group.id, 1).await.unwrap();

        crate::word_review::record_review(pool, session.id, word, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, word, false).await.unwrap();

        let (sessions, _) = list_activity_sessions(pool, 1, 1).await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].review_items_count, 2);
    }
}
