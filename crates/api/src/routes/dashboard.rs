//! Dashboard routes.

use axum::extract::State;
use axum::Json;
use database::{dashboard, LastStudySession, QuickStats, StudyProgress};

use crate::error::Result;
use crate::state::AppState;

/// Get the most recent study session.
pub async fn last_study_session(
    State(state): State<AppState>,
) -> Result<Json<LastStudySession>> {
    let session = dashboard::last_study_session(state.db.pool()).await?;
    Ok(Json(session))
}

/// Get overall study progress.
pub async fn study_progress(State(state): State<AppState>) -> Result<Json<StudyProgress>> {
    let progress = dashboard::study_progress(state.db.pool()).await?;
    Ok(Json(progress))
}

/// Get the quick-stats bundle.
pub async fn quick_stats(State(state): State<AppState>) -> Result<Json<QuickStats>> {
    let stats = dashboard::quick_stats(state.db.pool()).await?;
    Ok(Json(stats))
}
