//! Error handling for the vineyard dataset generator
//!
//! Every variant is fatal: the binaries print the chain and exit non-zero.

use std::path::PathBuf;

use shared::{NonFiniteValue, ValidationError};
use thiserror::Error;

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    // Flat-file store errors
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input table {} has no rows", .0.display())]
    EmptyInput(PathBuf),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    // Model errors
    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),

    #[error(transparent)]
    NonFinite(#[from] NonFiniteValue),

    #[error("Generated data failed validation: {0}")]
    InvariantViolation(#[from] ValidationError),
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        GeneratorError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;
