//! Game logic for Wordle Arena.
//!
//! Everything here is transport-agnostic: the server crate binds these
//! operations to HTTP routes and the solver crate consumes the dispatch
//! queues.
//!
//! # Modules
//!
//! - [`config`] -- Typed configuration loaded from `wordle-config.yaml`
//! - [`word_store`] -- The decoded base word list
//! - [`generator`] -- Padding base words to a requested length and class profile
//! - [`feedback`] -- Guess validation and positional scoring
//! - [`puzzle`] -- Puzzle records and the easy/hard generation profiles
//! - [`dispatch`] -- Ordered, close-to-complete handoff of puzzle addresses

pub mod config;
pub mod dispatch;
pub mod feedback;
pub mod generator;
pub mod puzzle;
pub mod word_store;

pub use config::{AppConfig, ConfigError};
pub use dispatch::{DispatchError, QueueConsumer, QueuePublisher, dispatch_queue};
pub use feedback::{GuessError, compute, score, validate};
pub use generator::{generate, pad_word};
pub use puzzle::{Difficulty, Puzzle};
pub use word_store::{WordStore, WordStoreError};
