//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A vocabulary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Word {
    /// Auto-incrementing ID.
    pub id: i64,
    /// The word in Japanese (e.g. "犬").
    pub japanese: String,
    /// Romanized reading (e.g. "inu").
    pub romaji: String,
    /// English translation.
    pub english: String,
    /// Optional JSON breakdown of the word's parts.
    pub parts: Option<String>,
    /// Number of correct reviews recorded for this word.
    pub correct_count: i64,
    /// Number of wrong reviews recorded for this word.
    pub wrong_count: i64,
}

/// A thematic collection of words (e.g. "Animals").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Group {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Group name, unique.
    pub name: String,
}

/// A named learning exercise type (e.g. "Vocabulary Quiz").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudyActivity {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Activity name.
    pub name: String,
    /// Thumbnail image URL, if one has been set.
    pub thumbnail_url: Option<String>,
}

/// A study activity with its display fields resolved for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudyActivityDetail {
    pub id: i64,
    pub name: String,
    /// Empty string when no thumbnail has been set.
    pub thumbnail_url: String,
    pub description: String,
}

/// One learner engagement with an activity against a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudySession {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Group being studied.
    pub group_id: i64,
    /// Creation timestamp, assigned by the store at insert time.
    pub created_at: String,
    /// Activity the session belongs to.
    pub study_activity_id: i64,
}

/// One recorded per-word correctness outcome within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WordReviewItem {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Word that was reviewed.
    pub word_id: i64,
    /// Session the review belongs to.
    pub study_session_id: i64,
    /// Whether the learner answered correctly.
    pub correct: bool,
    /// Creation timestamp.
    pub created_at: String,
}

/// The most recent study session, joined with its group's name.
///
/// When no session exists yet this carries the sentinel values (zero ids,
/// current timestamp, placeholder group name) rather than being an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LastStudySession {
    pub id: i64,
    pub group_id: i64,
    pub created_at: String,
    pub study_activity_id: i64,
    pub group_name: String,
}

/// Overall study progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProgress {
    /// Distinct words with at least one correct review.
    pub total_words_studied: i64,
    /// Total rows in the words table.
    pub total_available_words: i64,
}

/// Aggregate dashboard metrics, each computed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    /// Percentage of all reviews marked correct, 0 when there are none.
    pub success_rate: f64,
    pub total_study_sessions: i64,
    pub total_active_groups: i64,
    /// Streak tracking is not implemented yet; always 0.
    pub study_streak_days: i64,
    pub words_learned: i64,
    pub words_in_progress: i64,
}

/// A study session with its group name and review count resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudySessionDetail {
    pub id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub study_activity_id: i64,
    pub created_at: String,
    pub review_items_count: i64,
}

/// One session row in an activity's session listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ActivitySession {
    pub id: i64,
    pub activity_name: String,
    pub group_name: String,
    pub start_time: String,
    /// Session duration is not tracked; equal to `start_time`.
    pub end_time: String,
    pub review_items_count: i64,
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}
