//! Axum router construction for the puzzle API.
//!
//! The router is an owned value built from the shared [`AppState`]; the
//! generated puzzles are resolved through the registry by slug, so there is
//! no global route table to populate.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::registry::GUESS_PATH;
use crate::state::AppState;

/// Build the complete Axum router for the puzzle server.
///
/// The router includes:
/// - `GET /ping` -- health check
/// - `GET|POST /wordle/guess` -- default puzzle
/// - `GET|POST /wordle/guess/{slug}` -- generated puzzles
/// - `PUT /wordle/preferences` -- regenerate the default puzzle
///
/// Any other method on these paths yields `405 Method Not Allowed`.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            GUESS_PATH,
            get(handlers::get_default_preferences).post(handlers::post_default_guess),
        )
        .route(
            &format!("{GUESS_PATH}/{{slug}}"),
            get(handlers::get_preferences).post(handlers::post_guess),
        )
        .route(
            "/wordle/preferences",
            put(handlers::update_default_preferences),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
