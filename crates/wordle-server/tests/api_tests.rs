//! Integration tests for the puzzle API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wordle_core::{Difficulty, Puzzle, WordStore};
use wordle_server::Registry;
use wordle_server::router::build_router;
use wordle_server::state::AppState;
use wordle_types::Preferences;

fn make_test_state() -> Arc<AppState> {
    let mut registry = Registry::new();
    registry.insert(
        Difficulty::Easy,
        Puzzle {
            secret: "crane".to_owned(),
            preferences: Preferences::plain(5),
        },
    );
    registry.insert(
        Difficulty::Hard,
        Puzzle {
            secret: "x7Qcrane!!".to_owned(),
            preferences: Preferences {
                length: 10,
                allow_capitals: true,
                allow_special: true,
                allow_digits: true,
            },
        },
    );

    let words = Arc::new(WordStore::from_words(["ghost"]).unwrap());
    let default_puzzle = Puzzle {
        secret: "abc".to_owned(),
        preferences: Preferences::plain(3),
    };
    Arc::new(AppState::with_default_puzzle(registry, words, default_puzzle))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(path: &str, body: &str) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_ping() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"pong");
}

#[tokio::test]
async fn test_get_default_preferences() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/wordle/guess").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Length"], 3);
    assert_eq!(json["ContainsCapitalLetters"], false);
    assert_eq!(json["ContainsSpecialChars"], false);
    assert_eq!(json["ContainsNumbers"], false);
}

#[tokio::test]
async fn test_post_default_guess_scores() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/wordle/guess", r#"{"guess": "bca"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["feedback"], "111");
    assert_eq!(json["correctPositionCount"], 0);
    assert_eq!(json["partialMatchCount"], 3);
}

#[tokio::test]
async fn test_post_easy_guess_solved() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/wordle/guess/word0", r#"{"guess": "crane"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["feedback"], "22222");
    assert_eq!(json["correctPositionCount"], 5);
}

#[tokio::test]
async fn test_post_without_content_type_is_accepted() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::post("/wordle/guess/word0")
                .body(Body::from(r#"{"guess": "nacre"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["feedback"], "11112");
}

#[tokio::test]
async fn test_get_hard_preferences() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/wordle/guess/hardWord0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Length"], 10);
    assert_eq!(json["ContainsNumbers"], true);
}

#[tokio::test]
async fn test_hard_puzzle_accepts_enabled_classes() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/wordle/guess/hardWord0", r#"{"guess": "x7Qcrane!?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["feedback"], "2222222220");
}

#[tokio::test]
async fn test_wrong_length_is_bad_request() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/wordle/guess/word0", r#"{"guess": "cran"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("length"));
}

#[tokio::test]
async fn test_forbidden_classes_are_bad_request() {
    for (guess, needle) in [
        ("Crane", "capital"),
        ("cran3", "numbers"),
        ("cran!", "special"),
    ] {
        let router = build_router(make_test_state());
        let body = format!(r#"{{"guess": "{guess}"}}"#);
        let response = router
            .oneshot(post_json("/wordle/guess/word0", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_to_json(response.into_body()).await;
        assert!(json["error"].as_str().unwrap().contains(needle), "{guess}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(post_json("/wordle/guess/word0", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_puzzle_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/wordle/guess/word99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_methods_return_405() {
    for path in ["/wordle/guess", "/wordle/guess/word0"] {
        let router = build_router(make_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn test_update_default_preferences_regenerates_secret() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(
            Request::put("/wordle/preferences")
                .body(Body::from(
                    r#"{"Length": 8, "ContainsCapitalLetters": true,
                        "ContainsSpecialChars": false, "ContainsNumbers": false}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["Length"], 8);
    assert_eq!(json["ContainsCapitalLetters"], true);

    let puzzle = state.default_puzzle().await;
    assert_eq!(puzzle.secret.len(), 8);
    assert!(puzzle.secret.contains("ghost"));
    assert!(puzzle.preferences.allow_capitals);
}

#[tokio::test]
async fn test_update_default_preferences_rejects_huge_length() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::put("/wordle/preferences")
                .body(Body::from(r#"{"Length": 100000}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
