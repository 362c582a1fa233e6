//! Shared application state for the puzzle API.
//!
//! [`AppState`] holds the immutable puzzle [`Registry`], the word list
//! (needed to regenerate the default puzzle) and the default puzzle itself.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use wordle_core::{Puzzle, WordStore};
use wordle_types::Preferences;

use crate::registry::Registry;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug)]
pub struct AppState {
    /// Generated puzzles. Read-only after startup.
    pub registry: Registry,
    /// Word list used to regenerate the default puzzle.
    pub words: Arc<WordStore>,
    /// The puzzle served at `/wordle/guess`.
    default_puzzle: RwLock<Puzzle>,
}

impl AppState {
    /// Create the state, generating the default puzzle from `default_prefs`.
    pub fn new(registry: Registry, words: Arc<WordStore>, default_prefs: &Preferences) -> Self {
        let puzzle = Puzzle::generate(&words, default_prefs, &mut rand::rng());
        Self::with_default_puzzle(registry, words, puzzle)
    }

    /// Create the state with a known default puzzle.
    pub fn with_default_puzzle(registry: Registry, words: Arc<WordStore>, puzzle: Puzzle) -> Self {
        Self {
            registry,
            words,
            default_puzzle: RwLock::new(puzzle),
        }
    }

    /// Snapshot of the default puzzle.
    pub async fn default_puzzle(&self) -> Puzzle {
        self.default_puzzle.read().await.clone()
    }

    /// Replace the default puzzle's preferences and regenerate its secret.
    ///
    /// Secret and preferences are swapped under one write lock, so readers
    /// never observe a secret paired with the wrong constraints.
    pub async fn update_default_preferences(&self, requested: &Preferences) -> Preferences {
        let puzzle = Puzzle::generate(&self.words, requested, &mut rand::rng());
        let published = puzzle.preferences;
        *self.default_puzzle.write().await = puzzle;
        info!(
            length = published.length,
            allow_capitals = published.allow_capitals,
            allow_special = published.allow_special,
            allow_digits = published.allow_digits,
            "default puzzle regenerated"
        );
        published
    }
}
