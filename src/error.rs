use std::path::PathBuf;

use thiserror::Error;

use crate::ini::ParseError;
use crate::schema::{CoerceError, UsageError};

/// Top-level error type for the ini-bind library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid bind target: {0}")]
    Usage(#[from] UsageError),

    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to parse config file '{path}': {source}")]
    ParseFile { path: PathBuf, source: ParseError },

    #[error("invalid value in environment variable '{var}': {source}")]
    EnvValue { var: String, source: CoerceError },
}

impl Error {
    /// The 1-based line a parse failure was reported at.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse(e) | Error::ParseFile { source: e, .. } => Some(e.line()),
            _ => None,
        }
    }
}
