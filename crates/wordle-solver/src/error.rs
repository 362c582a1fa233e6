//! Error types for the solver.
//!
//! Any of these aborts the solving task that hit it; there is no retry.

use std::time::Duration;

/// Errors that can occur while solving a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server rejected request with {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The feedback string does not have one digit per position.
    #[error("feedback has {actual} digits, expected {expected}")]
    MalformedFeedback {
        /// Puzzle length.
        expected: usize,
        /// Digits received.
        actual: usize,
    },

    /// The cancellation signal fired.
    #[error("solve cancelled after {guesses} guesses")]
    Cancelled {
        /// Guesses submitted before cancellation.
        guesses: u64,
    },

    /// The per-puzzle deadline passed.
    #[error("solve of {address} timed out after {elapsed:?}")]
    TimedOut {
        /// Puzzle address.
        address: String,
        /// The configured deadline.
        elapsed: Duration,
    },
}
