use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for geocomplete
#[derive(Debug, Error)]
pub enum GeocompleteError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to start fetch worker: {0}")]
    WorkerSpawn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
