//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error returned by a job factory
pub type FactoryFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while turning a single trace line into a job
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    MissingFields { expected: usize, found: usize },

    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("job name {0:?} has no usable prefix before 'w'")]
    MalformedName(String),

    #[error("submit time {0:?} is too short to carry its sub-unit suffix")]
    SubmitTimeTooShort(String),
}

/// Errors that can occur while opening or enumerating a trace file
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("invalid range: to ({to}) is less than from ({from})")]
    InvalidRange { from: u64, to: u64 },

    #[error("cannot open trace file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: trace line {index}: {source}", .path.display())]
    Record {
        path: PathBuf,
        index: u64,
        #[source]
        source: RecordError,
    },

    #[error("{}: job factory failed on trace line {index}: {source}", .path.display())]
    Factory {
        path: PathBuf,
        index: u64,
        #[source]
        source: FactoryFailure,
    },
}

impl ReaderError {
    /// TraceIndex of the offending record, if the error is record-level
    pub fn trace_index(&self) -> Option<u64> {
        match self {
            ReaderError::Record { index, .. } | ReaderError::Factory { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Errors that can occur while writing or loading a job listing
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
