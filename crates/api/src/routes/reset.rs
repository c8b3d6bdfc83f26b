//! Reset routes.

use axum::extract::State;
use axum::Json;
use database::reset;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Delete all study history (sessions and review items).
pub async fn history(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    reset::reset_history(state.db.pool()).await?;
    Ok(Json(ResetResponse {
        success: true,
        message: "Study history has been reset".to_string(),
    }))
}

/// Delete all data.
pub async fn full(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    reset::reset_full(state.db.pool()).await?;
    Ok(Json(ResetResponse {
        success: true,
        message: "System has been fully reset".to_string(),
    }))
}
