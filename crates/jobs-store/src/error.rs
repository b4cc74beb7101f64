//! Error types for the staging store and search-index sink.

use std::path::PathBuf;
use thiserror::Error;

use jobs_ingest::IngestError;

/// Errors raised by store and sink operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested staging table does not exist.
    #[error("staging table not found: {name}")]
    TableNotFound { name: String },

    /// Underlying table file could not be read or written.
    #[error(transparent)]
    Table(#[from] IngestError),

    /// Bulk file could not be written.
    #[error("failed to write bulk file {path}: {source}")]
    BulkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be serialized for the bulk file.
    #[error("failed to serialize document for index '{index}': {source}")]
    Document {
        index: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
