//! Unified error handling module
//!
//! A single error type covers storage, loading, and resolution so that
//! callers only ever match on one enum.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TermFoldError {
    Io(io::Error),
    Serde(serde_json::Error),
    Sled(sled::Error),
    InvalidData(String),
    InvalidCurie(String),
    DatasourceNotFound(String),
    TermNotFound(String),
    LoadError(String),
    ConfigurationError(String),
}

impl fmt::Display for TermFoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermFoldError::Io(err) => write!(f, "IO error: {}", err),
            TermFoldError::Serde(err) => write!(f, "Serialization error: {}", err),
            TermFoldError::Sled(err) => write!(f, "Database error: {}", err),
            TermFoldError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            TermFoldError::InvalidCurie(msg) => write!(f, "Invalid curie: {}", msg),
            TermFoldError::DatasourceNotFound(msg) => write!(f, "Datasource not found: {}", msg),
            TermFoldError::TermNotFound(msg) => write!(f, "Term not found: {}", msg),
            TermFoldError::LoadError(msg) => write!(f, "Load error: {}", msg),
            TermFoldError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for TermFoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TermFoldError::Io(err) => Some(err),
            TermFoldError::Serde(err) => Some(err),
            TermFoldError::Sled(err) => Some(err),
            _ => None,
        }
    }
}

// Error conversions
impl From<io::Error> for TermFoldError {
    fn from(error: io::Error) -> Self {
        TermFoldError::Io(error)
    }
}

impl From<serde_json::Error> for TermFoldError {
    fn from(error: serde_json::Error) -> Self {
        TermFoldError::Serde(error)
    }
}

impl From<sled::Error> for TermFoldError {
    fn from(error: sled::Error) -> Self {
        TermFoldError::Sled(error)
    }
}

// Type alias for convenience
pub type TermFoldResult<T> = Result<T, TermFoldError>;
