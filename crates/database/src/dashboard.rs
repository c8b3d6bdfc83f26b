//! Dashboard aggregation queries.
//!
//! Read-only summaries over sessions and review history. The dashboard
//! favors availability over strict correctness: supplementary metrics that
//! fail to compute degrade to zero instead of failing the whole call. Which
//! fields degrade and which propagate is part of each operation's contract.

use sqlx::SqlitePool;

use crate::models::{LastStudySession, QuickStats, StudyProgress};
use crate::Result;

/// Group name reported when no session has been recorded yet.
const NO_SESSIONS_PLACEHOLDER: &str = "No recent sessions";

/// Get the most recently created study session, joined with its group name.
///
/// An empty session table yields a sentinel value (zero ids, current store
/// time, placeholder group name), not an error. Any other query failure
/// propagates.
pub async fn last_study_session(pool: &SqlitePool) -> Result<LastStudySession> {
    let session = sqlx::query_as::<_, LastStudySession>(
        r#"
        SELECT id, group_id, created_at, study_activity_id,
               (SELECT name FROM groups WHERE id = study_sessions.group_id) AS group_name
        FROM study_sessions
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    match session {
        Some(session) => Ok(session),
        None => {
            // Take "now" from the store clock so the sentinel timestamp has
            // the same format as CURRENT_TIMESTAMP-assigned rows.
            let now = sqlx::query_scalar::<_, String>("SELECT datetime('now')")
                .fetch_one(pool)
                .await?;
            Ok(LastStudySession {
                id: 0,
                group_id: 0,
                created_at: now,
                study_activity_id: 0,
                group_name: NO_SESSIONS_PLACEHOLDER.to_string(),
            })
        }
    }
}

/// Get overall study progress.
///
/// The total word count is required and its failure propagates; the
/// studied-word count is supplementary and degrades to 0 on failure.
pub async fn study_progress(pool: &SqlitePool) -> Result<StudyProgress> {
    let total_available_words = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM words
        "#,
    )
    .fetch_one(pool)
    .await?;

    let total_words_studied = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT word_id)
        FROM word_review_items
        WHERE correct = 1
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap_or(0);

    Ok(StudyProgress {
        total_words_studied,
        total_available_words,
    })
}

/// Get the quick-stats bundle.
///
/// Every sub-query degrades its own field(s) to zero on failure, so a
/// single broken metric never blanks the whole dashboard. The streak is a
/// fixed 0 until streak tracking lands.
pub async fn quick_stats(pool: &SqlitePool) -> Result<QuickStats> {
    let total_study_sessions = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM study_sessions
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap_or(0);

    let total_active_groups = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM groups
        "#,
    )
    .fetch_one(pool)
    .await
    .unwrap_or(0);

    // words_learned and words_in_progress are the same count for now; see
    // the repository design notes.
    let (success_rate, words_learned, words_in_progress) =
        sqlx::query_as::<_, (f64, i64, i64)>(
            r#"
            SELECT
                CASE
                    WHEN COUNT(*) > 0
                    THEN (CAST(SUM(CASE WHEN correct = 1 THEN 1 ELSE 0 END) AS FLOAT) / COUNT(*)) * 100
                    ELSE 0.0
                END AS success_rate,
                COUNT(DISTINCT word_id) AS words_learned,
                COUNT(DISTINCT word_id) AS words_in_progress
            FROM word_review_items
            "#,
        )
        .fetch_one(pool)
        .await
        .unwrap_or((0.0, 0, 0));

    Ok(QuickStats {
        success_rate,
        total_study_sessions,
        total_active_groups,
        study_streak_days: 0,
        words_learned,
        words_in_progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_word, test_db};

    #[tokio::test]
    async fn last_session_sentinel_when_empty() {
        let db = test_db().await;

        let last = last_study_session(db.pool()).await.unwrap();
        assert_eq!(last.id, 0);
        assert_eq!(last.group_id, 0);
        assert_eq!(last.study_activity_id, 0);
        assert_eq!(last.group_name, NO_SESSIONS_PLACEHOLDER);
        assert!(!last.created_at.is_empty());
    }

    #[tokio::test]
    async fn last_session_returns_most_recent() {
        let db = test_db().await;
        let pool = db.pool();

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let older = crate::study_activity::create_study_session(pool, group.id, 1)
            .await
            .unwrap();
        // Backdate the first session so ordering is deterministic.
        sqlx::query("UPDATE study_sessions SET created_at = datetime('now', '-1 hour') WHERE id = ?")
            .bind(older.id)
            .execute(pool)
            .await
            .unwrap();
        let newer = crate::study_activity::create_study_session(pool, group.id, 2)
            .await
            .unwrap();

        let last = last_study_session(pool).await.unwrap();
        assert_eq!(last.id, newer.id);
        assert_eq!(last.group_name, "Animals");
    }

    #[tokio::test]
    async fn progress_counts_distinct_correct_words() {
        let db = test_db().await;
        let pool = db.pool();

        let dog = seed_word(pool, "犬", "inu", "dog").await;
        let cat = seed_word(pool, "猫", "neko", "cat").await;
        seed_word(pool, "鳥", "tori", "bird").await;

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let session = crate::study_activity::create_study_session(pool, group.id, 1)
            .await
            .unwrap();

        // Two correct reviews of the same word count once; a wrong review
        // does not count as studied.
        crate::word_review::record_review(pool, session.id, dog, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, dog, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, cat, false).await.unwrap();

        let progress = study_progress(pool).await.unwrap();
        assert_eq!(progress.total_available_words, 3);
        assert_eq!(progress.total_words_studied, 1);
    }

    #[tokio::test]
    async fn quick_stats_with_no_reviews() {
        let db = test_db().await;

        let stats = quick_stats(db.pool()).await.unwrap();
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.total_study_sessions, 0);
        // Migration seeds three groups.
        assert_eq!(stats.total_active_groups, 3);
        assert_eq!(stats.study_streak_days, 0);
        assert_eq!(stats.words_learned, 0);
        assert_eq!(stats.words_in_progress, 0);
    }

    #[tokio::test]
    async fn review_metrics_degrade_when_review_table_is_missing() {
        let db = test_db().await;
        let pool = db.pool();

        seed_word(pool, "犬", "inu", "dog").await;
        seed_word(pool, "猫", "neko", "cat").await;
        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        crate::study_activity::create_study_session(pool, group.id, 1)
            .await
            .unwrap();

        // Break the review sub-queries; word, group, and session counts
        // must survive while review-derived fields fall back to zero.
        sqlx::query("DROP TABLE word_review_items")
            .execute(pool)
            .await
            .unwrap();

        let progress = study_progress(pool).await.unwrap();
        assert_eq!(progress.total_available_words, 2);
        assert_eq!(progress.total_words_studied, 0);

        let stats = quick_stats(pool).await.unwrap();
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.words_learned, 0);
        assert_eq!(stats.words_in_progress, 0);
        assert_eq!(stats.total_study_sessions, 1);
        assert_eq!(stats.total_active_groups, 3);
    }

    #[tokio::test]
    async fn quick_stats_success_rate() {
        let db = test_db().await;
        let pool = db.pool();

        let dog = seed_word(pool, "犬", "inu", "dog").await;
        let cat = seed_word(pool, "猫", "neko", "cat").await;

        let group = crate::group::get_group_by_name(pool, "Animals").await.unwrap();
        let session = crate::study_activity::create_study_session(pool, group.id, 1)
            .await
            .unwrap();

        crate::word_review::record_review(pool, session.id, dog, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, dog, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, cat, true).await.unwrap();
        crate::word_review::record_review(pool, session.id, cat, false).await.unwrap();

        let stats = quick_stats(pool).await.unwrap();
        assert_eq!(stats.success_rate, 75.0);
        assert_eq!(stats.total_study_sessions, 1);
        assert_eq!(stats.words_learned, 2);
        assert_eq!(stats.words_in_progress, 2);
    }
}
