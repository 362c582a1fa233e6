//! Automated solver for Wordle Arena puzzles.
//!
//! The solver learns a secret purely from feedback strings:
//!
//! ```text
//! GET preferences --> probe one char per request --> random guesses until "22..2"
//! ```
//!
//! A [`Dispatcher`] drains one dispatch queue and runs a solving task per
//! address through a bounded worker pool.

pub mod client;
pub mod dispatcher;
pub mod error;
pub mod solver;

pub use client::{HttpPuzzle, PuzzleOracle};
pub use dispatcher::{DispatchReport, Dispatcher};
pub use error::SolverError;
pub use solver::{CancelSignal, Solution, Solver};
