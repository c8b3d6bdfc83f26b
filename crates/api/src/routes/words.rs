//! Word routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::{word, word_review, NewWord, Word, WordReviewItem};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    pub japanese: String,
    pub romaji: String,
    pub english: String,
    #[serde(default)]
    pub parts: Option<String>,
}

impl From<WordRequest> for NewWord {
    fn from(request: WordRequest) -> Self {
        NewWord {
            japanese: request.japanese,
            romaji: request.romaji,
            english: request.english,
            parts: request.parts,
        }
    }
}

/// List all words.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Word>>> {
    let words = word::list_words(state.db.pool()).await?;
    Ok(Json(words))
}

/// Get a single word.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Word>> {
    let word = word::get_word(state.db.pool(), id).await?;
    Ok(Json(word))
}

/// Create a word.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<WordRequest>,
) -> Result<(StatusCode, Json<Word>)> {
    let word = word::create_word(state.db.pool(), &request.into()).await?;
    Ok((StatusCode::CREATED, Json(word)))
}

/// Update a word's text fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<WordRequest>,
) -> Result<Json<Word>> {
    word::update_word(state.db.pool(), id, &request.into()).await?;
    let word = word::get_word(state.db.pool(), id).await?;
    Ok(Json(word))
}

/// Delete a word.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode> {
    word::delete_word(state.db.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub correct: bool,
}

/// Record a review outcome for a word within a session.
pub async fn review(
    State(state): State<AppState>,
    Path((session_id, word_id)): Path<(i64, i64)>,
    Json(request): Json<ReviewRequest>,
) -> Result<(StatusCode, Json<WordReviewItem>)> {
    let item =
        word_review::record_review(state.db.pool(), session_id, word_id, request.correct).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
