//! Access to a single puzzle's guess endpoint.
//!
//! [`PuzzleOracle`] is the seam between the solving algorithm and the
//! transport. [`HttpPuzzle`] is the production implementation over
//! `reqwest`; tests can answer from an in-memory puzzle instead.

use std::future::Future;

use tracing::debug;
use wordle_types::{GuessRequest, GuessResponse, Preferences};

use crate::error::SolverError;

/// Something that can describe a puzzle and score guesses against it.
pub trait PuzzleOracle {
    /// Identifier used in logs and the final [`Solution`](crate::Solution).
    fn address(&self) -> &str;

    /// Fetch the puzzle's published preferences.
    fn preferences(&self) -> impl Future<Output = Result<Preferences, SolverError>> + Send;

    /// Submit one guess and return the server's scoring.
    fn submit(&self, guess: &[u8])
    -> impl Future<Output = Result<GuessResponse, SolverError>> + Send;
}

/// A puzzle reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPuzzle {
    http: reqwest::Client,
    address: String,
}

impl HttpPuzzle {
    /// Create a handle for the guess endpoint at `address`.
    ///
    /// `reqwest::Client` pools connections internally, so callers should
    /// clone one client rather than building a new one per puzzle.
    pub const fn new(http: reqwest::Client, address: String) -> Self {
        Self { http, address }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, SolverError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error body".to_owned());
        Err(SolverError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl PuzzleOracle for HttpPuzzle {
    fn address(&self) -> &str {
        &self.address
    }

    async fn preferences(&self) -> Result<Preferences, SolverError> {
        let response = self.http.get(&self.address).send().await?;
        let preferences = Self::check(response).await?.json().await?;
        debug!(address = %self.address, ?preferences, "fetched preferences");
        Ok(preferences)
    }

    async fn submit(&self, guess: &[u8]) -> Result<GuessResponse, SolverError> {
        let response = self
            .http
            .post(&self.address)
            .json(&GuessRequest::from_bytes(guess))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
