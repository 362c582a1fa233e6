//! Shared type definitions for Wordle Arena.
//!
//! Both the puzzle server and the solver speak the same JSON dialect; this
//! crate is the single source of truth for it.
//!
//! # Modules
//!
//! - [`charset`] -- Character classes and the alphabets built from them
//! - [`wire`] -- Request/response payloads for the guess endpoints

pub mod charset;
pub mod wire;

pub use charset::{CharClass, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
pub use wire::{
    FEEDBACK_ABSENT, FEEDBACK_CORRECT, FEEDBACK_PRESENT, GuessRequest, GuessResponse, Preferences,
};
