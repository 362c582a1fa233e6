//! REST endpoint handlers for the puzzle API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/ping` | Health check |
//! | `GET` | `/wordle/guess` | Default puzzle preferences |
//! | `POST` | `/wordle/guess` | Score a guess against the default puzzle |
//! | `GET` | `/wordle/guess/{slug}` | Preferences of a generated puzzle |
//! | `POST` | `/wordle/guess/{slug}` | Score a guess against a generated puzzle |
//! | `PUT` | `/wordle/preferences` | Regenerate the default puzzle |
//!
//! Request bodies are decoded from raw bytes rather than with the `Json`
//! extractor, so a missing `Content-Type` is accepted and every decoding
//! failure maps to `400`.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::de::DeserializeOwned;
use tracing::debug;
use wordle_core::Puzzle;
use wordle_types::{GuessRequest, GuessResponse, Preferences};

use crate::error::ApiError;
use crate::state::AppState;

/// Longest default puzzle a client may request.
pub const MAX_REQUESTED_LENGTH: usize = 256;

/// `GET /ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /wordle/guess`
pub async fn get_default_preferences(State(state): State<Arc<AppState>>) -> Json<Preferences> {
    Json(state.default_puzzle().await.preferences)
}

/// `POST /wordle/guess`
pub async fn post_default_guess(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GuessResponse>, ApiError> {
    let puzzle = state.default_puzzle().await;
    score_body(&puzzle, "default", &body)
}

/// `GET /wordle/guess/{slug}`
pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Preferences>, ApiError> {
    let puzzle = lookup(&state, &slug)?;
    Ok(Json(puzzle.preferences))
}

/// `POST /wordle/guess/{slug}`
pub async fn post_guess(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Result<Json<GuessResponse>, ApiError> {
    let puzzle = lookup(&state, &slug)?;
    score_body(puzzle, &slug, &body)
}

/// `PUT /wordle/preferences`
///
/// Returns the published preferences, whose `Length` is the real length
/// of the new secret.
pub async fn update_default_preferences(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Preferences>, ApiError> {
    let requested: Preferences = decode(&body)?;
    if requested.length > MAX_REQUESTED_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "length {} exceeds maximum of {MAX_REQUESTED_LENGTH}",
            requested.length
        )));
    }
    Ok(Json(state.update_default_preferences(&requested).await))
}

fn lookup<'a>(state: &'a AppState, slug: &str) -> Result<&'a Puzzle, ApiError> {
    state
        .registry
        .get(slug)
        .ok_or_else(|| ApiError::NotFound(slug.to_owned()))
}

fn score_body(puzzle: &Puzzle, slug: &str, body: &[u8]) -> Result<Json<GuessResponse>, ApiError> {
    let request: GuessRequest = decode(body)?;
    let response = puzzle.score(&request.guess).inspect_err(|e| {
        debug!(puzzle = slug, error = %e, "guess rejected");
    })?;
    debug!(
        puzzle = slug,
        correct = response.correct_count,
        partial = response.partial_count,
        "guess scored"
    );
    Ok(Json(response))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}
