//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for adreach operations
#[derive(Debug, Error)]
pub enum AdReachError {
    /// The investment text could not be turned into an amount
    #[error("Invalid investment '{input}': {reason}")]
    InvalidInvestment { input: String, reason: String },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// File system errors with the path that failed
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AdReachError {
    pub fn invalid_investment(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInvestment {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, AdReachError>;
