//! Error types for combat log parsing

use std::path::PathBuf;
use thiserror::Error;

/// Errors during combat log line parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line_number}: timestamp bracket is never closed")]
    UnterminatedTimestamp { line_number: u64 },
}

/// Errors during log file reading operations
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("failed to open log file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file metadata for {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to memory map file {path}")]
    MemoryMap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file {path} is {size} bytes, limit is {max}")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("failed to read directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
