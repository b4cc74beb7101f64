//! Bulk-format search-index sink.
//!
//! Writes the search engine's bulk wire format: for each document, an
//! action line naming the target index followed by the document source
//! line. Documents carry no explicit id, so identifiers stay
//! index-assigned. The file is staged and renamed into place, so a failed
//! upload leaves no partial bulk artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::NamedTempFile;
use tracing::debug;

use jobs_model::CleanPosting;

use crate::SearchIndexSink;
use crate::error::{Result, StoreError};

/// Sink writing `<index>.bulk.ndjson` under a root directory.
#[derive(Debug, Clone)]
pub struct BulkFileSink {
    root: PathBuf,
}

impl BulkFileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the bulk file for an index name.
    pub fn bulk_path(&self, index: &str) -> PathBuf {
        self.root.join(format!("{index}.bulk.ndjson"))
    }
}

impl SearchIndexSink for BulkFileSink {
    fn bulk_index(&self, index: &str, postings: &[CleanPosting]) -> Result<usize> {
        let path = self.bulk_path(index);
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::BulkWrite {
            path: path.clone(),
            source: e,
        })?;
        let mut staged = NamedTempFile::new_in(&self.root).map_err(|e| StoreError::BulkWrite {
            path: path.clone(),
            source: e,
        })?;

        for posting in postings {
            let action = json!({ "index": { "_index": index } });
            let source = serde_json::to_string(posting).map_err(|e| StoreError::Document {
                index: index.to_string(),
                source: e,
            })?;
            writeln!(staged, "{action}\n{source}").map_err(|e| StoreError::BulkWrite {
                path: path.clone(),
                source: e,
            })?;
        }

        staged.persist(&path).map_err(|e| StoreError::BulkWrite {
            path: path.clone(),
            source: e.error,
        })?;
        debug!(index, documents = postings.len(), path = %path.display(), "bulk file written");
        Ok(postings.len())
    }
}

/// Path of the bulk file for an index under a root; used by tests and tooling.
pub fn bulk_file(root: &Path, index: &str) -> PathBuf {
    root.join(format!("{index}.bulk.ndjson"))
}
