//! Route handlers for the API.

pub mod dashboard;
pub mod groups;
pub mod health;
pub mod reset;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Dashboard
        .route(
            "/api/dashboard/last_study_session",
            get(dashboard::last_study_session),
        )
        .route(
            "/api/dashboard/study_progress",
            get(dashboard::study_progress),
        )
        .route("/api/dashboard/quick-stats", get(dashboard::quick_stats))
        // Study activities and sessions
        .route(
            "/api/study-activities",
            get(study_activities::list).post(study_activities::create_session),
        )
        .route("/api/study-activities/:id", get(study_activities::show))
        .route(
            "/api/study-activities/:id/study_sessions",
            get(study_activities::sessions),
        )
        .route("/api/study-sessions", get(study_sessions::list))
        .route("/api/study-sessions/:id", get(study_sessions::show))
        .route(
            "/api/study-sessions/:id/words",
            get(study_sessions::words),
        )
        .route(
            "/api/study-sessions/:id/words/:word_id/review",
            post(words::review),
        )
        // Words
        .route("/api/words", get(words::list).post(words::create))
        .route(
            "/api/words/:id",
            get(words::show).put(words::update).delete(words::delete),
        )
        // Groups
        .route("/api/groups", get(groups::list).post(groups::create))
        .route("/api/groups/:id", get(groups::show).put(groups::update))
        .route("/api/groups/:id/words", get(groups::words))
        // Reset
        .route("/api/reset/history", post(reset::history))
        .route("/api/reset/full", post(reset::full))
}
