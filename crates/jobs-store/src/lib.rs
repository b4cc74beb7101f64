//! Collaborator seams around the normalization core.
//!
//! The pipeline talks to its relational staging store and its search index
//! through the [`StagingStore`] and [`SearchIndexSink`] traits. The
//! implementations here are file-backed: a directory of CSV tables and a
//! newline-delimited bulk file. Every call acquires and releases its own
//! file handles; nothing is held open across calls.

pub mod bulk;
pub mod error;
pub mod staging;

pub use bulk::BulkFileSink;
pub use error::{Result, StoreError};
pub use staging::CsvStagingStore;

use jobs_model::{CleanPosting, RawPosting};

/// A relational staging store holding raw postings between pipeline stages.
pub trait StagingStore {
    /// Persist `postings` as the named table, replacing any existing table
    /// of that name.
    fn replace_table(&self, name: &str, postings: &[RawPosting]) -> Result<()>;

    /// Fetch the full contents of the named table.
    fn fetch_table(&self, name: &str) -> Result<Vec<RawPosting>>;
}

/// A search index accepting cleaned postings as documents.
pub trait SearchIndexSink {
    /// Index each posting as one document in the named index and return the
    /// number of documents written. Document identifiers are
    /// index-assigned; this pipeline sets no explicit key field.
    fn bulk_index(&self, index: &str, postings: &[CleanPosting]) -> Result<usize>;
}
