//! # Service Error Types
//!
//! All errors that can occur outside the pure generator.

use std::path::PathBuf;

use fairisle_procedural::SeedError;
use thiserror::Error;

/// Errors raised by configuration, metadata and batch output.
#[derive(Error, Debug)]
pub enum FairIsleError {
    /// Seed or token id could not be parsed.
    #[error("invalid seed: {0}")]
    Seed(#[from] SeedError),

    /// Reading or writing a file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or has unknown keys.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Metadata could not be serialized.
    #[error("metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A seed range with `from > to`.
    #[error("empty seed range: {from}..={to}")]
    EmptyRange {
        /// First seed.
        from: u64,
        /// Last seed.
        to: u64,
    },

    /// A batch worker stopped before finishing its jobs.
    #[error("batch worker failed: {0}")]
    WorkerFailed(String),
}

impl FairIsleError {
    /// Wraps an I/O error with the path it happened on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for service operations.
pub type FairIsleResult<T> = Result<T, FairIsleError>;
