//! Group routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::{group, Group, Word};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// List all groups.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Group>>> {
    let groups = group::list_groups(state.db.pool()).await?;
    Ok(Json(groups))
}

/// Get a single group.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Group>> {
    let group = group::get_group(state.db.pool(), id).await?;
    Ok(Json(group))
}

/// List the words linked to a group.
pub async fn words(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Vec<Word>>> {
    // Missing groups surface as NotFound rather than an empty list.
    group::get_group(state.db.pool(), id).await?;
    let words = group::list_group_words(state.db.pool(), id).await?;
    Ok(Json(words))
}

#[derive(Debug, Deserialize)]
pub struct GroupRequest {
    pub name: String,
}

/// Create a group.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<GroupRequest>,
) -> Result<(StatusCode, Json<Group>)> {
    let group = group::create_group(state.db.pool(), &request.name).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Rename a group.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<GroupRequest>,
) -> Result<Json<Group>> {
    let group = group::update_group(state.db.pool(), id, &request.name).await?;
    Ok(Json(group))
}
