//! Error types for dataset loading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a dataset file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the staged output into place.
    #[error("failed to persist output {path}: {message}")]
    Persist { path: PathBuf, message: String },

    // === CSV Errors ===
    /// A row could not be parsed into a posting record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A record could not be serialized to CSV.
    #[error("failed to serialize CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// CSV file has a header but no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
