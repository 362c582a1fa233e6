//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure that stops startup, so `main` can
//! propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: wordle_core::ConfigError,
    },

    /// The word list could not be loaded.
    #[error("word list error: {source}")]
    Words {
        /// The underlying word store error.
        #[from]
        source: wordle_core::WordStoreError,
    },

    /// The puzzle server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: wordle_server::ServerError,
    },

    /// A background task panicked or was aborted.
    #[error("task error: {message}")]
    Task {
        /// Description of the task failure.
        message: String,
    },
}
