//! Study activity routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::{
    study_activity, ActivitySession, Pagination, StudyActivity, StudyActivityDetail,
    StudySession,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// List all study activities.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StudyActivity>>> {
    let activities = study_activity::list_study_activities(state.db.pool()).await?;
    Ok(Json(activities))
}

/// Get a single study activity.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StudyActivityDetail>> {
    let activity = study_activity::get_study_activity(state.db.pool(), id).await?;
    Ok(Json(activity))
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// One page of an activity's sessions plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct SessionsPage {
    pub items: Vec<ActivitySession>,
    pub pagination: Pagination,
}

/// List an activity's study sessions, paginated.
pub async fn sessions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<SessionsPage>> {
    let (items, pagination) =
        study_activity::list_activity_sessions(state.db.pool(), id, query.page).await?;
    Ok(Json(SessionsPage { items, pagination }))
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub group_id: i64,
    pub study_activity_id: i64,
}

/// Create a study session for a group and activity.
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<StudySession>)> {
    let session = study_activity::create_study_session(
        state.db.pool(),
        request.group_id,
        request.study_activity_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(session)))
}
