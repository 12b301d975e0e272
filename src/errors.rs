//! Error types for lambdagame.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lambdagame operations
#[derive(Debug, Error)]
pub enum Error {
    /// `get` was called on an empty optional
    #[error("get() called on an empty optional: nothing to reduce")]
    EmptyOptional,

    /// No scenario is registered under the requested name
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// A scenario produced a different count than its peers
    #[error("Scenario '{scenario}' counted {actual} consonants, expected {expected}")]
    Disagreement {
        scenario: String,
        expected: usize,
        actual: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serializing a report to JSON failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// Result type alias for lambdagame operations
pub type Result<T> = std::result::Result<T, Error>;
