//! CLI errors

use eva_core::EvaError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed row in the input CSV
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct DataError {
    /// 1-based line number
    pub line: u64,
    pub message: String,
}

impl DataError {
    pub fn new(line: u64, message: impl Into<String>) -> Self {
        Self { line, message: message.into() }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Eva(#[from] EvaError),

    #[error("Data error in input: {0}")]
    Data(#[from] DataError),

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io { path: path.into(), source }
    }
}
