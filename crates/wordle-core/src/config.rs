//! Configuration loading and typed config structures for Wordle Arena.
//!
//! The canonical configuration lives in `wordle-config.yaml` at the project
//! root. Every section and field has a default, so a missing file or a
//! partial one is fine. Selected values can be overridden from the
//! environment after parsing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is out of range, or an override did not parse.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration. Mirrors the structure of `wordle-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Word list location.
    #[serde(default)]
    pub words: WordsConfig,

    /// Puzzle counts and generation profiles.
    #[serde(default)]
    pub puzzles: PuzzleConfig,

    /// Solver pool settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path, then apply
    /// environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load `path` if it exists, otherwise start from defaults. Environment
    /// overrides and validation apply in both cases.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        info!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] or [`ConfigError::Invalid`].
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up through `lookup`:
    ///
    /// - `WORDLE_HOST` -> `server.host`
    /// - `WORDLE_PORT` -> `server.port`
    /// - `WORDLE_WORDS_PATH` -> `words.path`
    /// - `WORDLE_PUZZLE_COUNT` -> `puzzles.count`
    /// - `WORDLE_MAX_SOLVERS` -> `solver.max_concurrent_solvers`
    /// - `WORDLE_SOLVER_TIMEOUT_MS` -> `solver.timeout_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric override does not parse.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("WORDLE_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("WORDLE_PORT") {
            self.server.port = parse_override("WORDLE_PORT", &val)?;
        }
        if let Some(val) = lookup("WORDLE_WORDS_PATH") {
            self.words.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("WORDLE_PUZZLE_COUNT") {
            self.puzzles.count = parse_override("WORDLE_PUZZLE_COUNT", &val)?;
        }
        if let Some(val) = lookup("WORDLE_MAX_SOLVERS") {
            self.solver.max_concurrent_solvers = parse_override("WORDLE_MAX_SOLVERS", &val)?;
        }
        if let Some(val) = lookup("WORDLE_SOLVER_TIMEOUT_MS") {
            self.solver.timeout_ms = parse_override("WORDLE_SOLVER_TIMEOUT_MS", &val)?;
        }
        Ok(())
    }

    /// Reject configurations the rest of the system cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.puzzles.hard_min_length > self.puzzles.hard_max_length {
            return Err(ConfigError::Invalid(format!(
                "puzzles.hard_min_length ({}) exceeds puzzles.hard_max_length ({})",
                self.puzzles.hard_min_length, self.puzzles.hard_max_length
            )));
        }
        if !self.solver.filler.is_ascii_lowercase() {
            return Err(ConfigError::Invalid(format!(
                "solver.filler must be a lowercase ASCII letter, got {:?}",
                self.solver.filler
            )));
        }
        Ok(())
    }
}

fn parse_override<T>(key: &str, val: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.parse()
        .map_err(|e| ConfigError::Invalid(format!("invalid {key}: {e}")))
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port. `0` lets the OS pick one.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Word list configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordsConfig {
    /// Path to the base64-encoded, newline-delimited word list.
    #[serde(default = "default_words_path")]
    pub path: PathBuf,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            path: default_words_path(),
        }
    }
}

/// How many puzzles to create and how to shape them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleConfig {
    /// Puzzles per family (easy and hard each get this many).
    #[serde(default = "default_puzzle_count")]
    pub count: usize,

    /// Length of easy puzzles. `0` keeps base words unmodified.
    #[serde(default)]
    pub easy_length: usize,

    /// Shortest hard puzzle, inclusive.
    #[serde(default = "default_hard_min_length")]
    pub hard_min_length: usize,

    /// Longest hard puzzle, inclusive.
    #[serde(default = "default_hard_max_length")]
    pub hard_max_length: usize,

    /// Length of the default puzzle at `/wordle/guess`.
    #[serde(default = "default_default_length")]
    pub default_length: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            count: default_puzzle_count(),
            easy_length: 0,
            hard_min_length: default_hard_min_length(),
            hard_max_length: default_hard_max_length(),
            default_length: default_default_length(),
        }
    }
}

/// Solver pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolverConfig {
    /// Whether the engine runs the solver against its own puzzles.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum solving tasks running at once per queue. `0` = unbounded.
    /// Only enforced together with a non-zero `timeout_ms`; without a
    /// deadline a stalled solve would hold its slot forever.
    #[serde(default = "default_max_concurrent_solvers")]
    pub max_concurrent_solvers: usize,

    /// Per-puzzle deadline in milliseconds. `0` = no deadline.
    #[serde(default)]
    pub timeout_ms: u64,

    /// Character used to fill probe and initial guess positions.
    #[serde(default = "default_filler")]
    pub filler: char,

    /// How far publication may run ahead of the dispatcher.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl SolverConfig {
    /// The per-puzzle deadline, if one is configured.
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_concurrent_solvers: default_max_concurrent_solvers(),
            timeout_ms: 0,
            filler: default_filler(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_words_path() -> PathBuf {
    PathBuf::from("data/words.b64")
}

const fn default_puzzle_count() -> usize {
    50
}

const fn default_hard_min_length() -> usize {
    10
}

const fn default_hard_max_length() -> usize {
    19
}

const fn default_default_length() -> usize {
    10
}

const fn default_true() -> bool {
    true
}

const fn default_max_concurrent_solvers() -> usize {
    0
}

const fn default_filler() -> char {
    'a'
}

const fn default_queue_capacity() -> usize {
    64
}
