//! Study session browsing routes.

use axum::extract::{Path, Query, State};
use axum::Json;
use database::{study_session, Pagination, StudySessionDetail, Word};
use serde::Serialize;

use crate::error::Result;
use crate::routes::study_activities::PageQuery;
use crate::state::AppState;

/// One page of study sessions plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct SessionsPage {
    pub items: Vec<StudySessionDetail>,
    pub pagination: Pagination,
}

/// One page of a session's reviewed words plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct SessionWordsPage {
    pub items: Vec<Word>,
    pub pagination: Pagination,
}

/// List all study sessions, paginated.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<SessionsPage>> {
    let (items, pagination) =
        study_session::list_study_sessions(state.db.pool(), query.page).await?;
    Ok(Json(SessionsPage { items, pagination }))
}

/// Get a single study session.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudySessionDetail>> {
    let session = study_session::get_study_session(state.db.pool(), id).await?;
    Ok(Json(session))
}

/// List the words reviewed in a session, paginated.
pub async fn words(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<SessionWordsPage>> {
    let (items, pagination) =
        study_session::list_session_words(state.db.pool(), id, query.page).await?;
    Ok(Json(SessionWordsPage { items, pagination }))
}
