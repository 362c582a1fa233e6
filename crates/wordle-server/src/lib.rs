//! Puzzle API server for Wordle Arena.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Default puzzle** (`/wordle/guess`) whose preferences can be replaced
//!   at runtime (`PUT /wordle/preferences`)
//! - **Generated puzzles** (`/wordle/guess/word{i}`, `/wordle/guess/hardWord{i}`)
//!   created once at startup
//! - **Health check** (`GET /ping`)
//!
//! # Architecture
//!
//! The [`Registry`] is built once and never mutated; the router reads it
//! without locks. Only the default puzzle sits behind a lock, and its
//! secret and preferences are always swapped together.
//!
//! [`Registry`]: registry::Registry

pub mod error;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use registry::Registry;
pub use router::build_router;
pub use server::{RunningServer, ServerConfig, ServerError, spawn_server};
pub use state::AppState;
