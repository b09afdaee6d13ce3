//! Structured error type for the loading and configuration layer.
//!
//! Engine calls (select, aggregate, sort) are total and never fail; errors
//! only arise at the edges where files are read and parsed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SalescopeError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl SalescopeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SalescopeError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SalescopeError::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SalescopeError::Config {
            message: message.into(),
        }
    }
}
