//! Directory-backed staging store: one CSV file per table.

use std::path::{Path, PathBuf};

use tracing::debug;

use jobs_ingest::{IngestError, read_raw_postings, write_raw_postings};
use jobs_model::RawPosting;

use crate::StagingStore;
use crate::error::{Result, StoreError};

/// Staging store rooted at a directory, holding each table as
/// `<name>.csv`. Replacement is atomic (staged write + rename), and file
/// handles live only for the duration of a single call.
#[derive(Debug, Clone)]
pub struct CsvStagingStore {
    root: PathBuf,
}

impl CsvStagingStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.csv"))
    }
}

impl StagingStore for CsvStagingStore {
    fn replace_table(&self, name: &str, postings: &[RawPosting]) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            StoreError::Table(IngestError::FileWrite {
                path: self.root.clone(),
                source: e,
            })
        })?;
        let path = self.table_path(name);
        write_raw_postings(postings, &path)?;
        debug!(table = name, rows = postings.len(), path = %path.display(), "table replaced");
        Ok(())
    }

    fn fetch_table(&self, name: &str) -> Result<Vec<RawPosting>> {
        let path = self.table_path(name);
        let postings = read_raw_postings(&path).map_err(|e| match e {
            IngestError::FileNotFound { .. } => StoreError::TableNotFound {
                name: name.to_string(),
            },
            other => StoreError::Table(other),
        })?;
        debug!(table = name, rows = postings.len(), path = %path.display(), "table fetched");
        Ok(postings)
    }
}

/// Path of a table inside a store root; used by tests and tooling.
pub fn table_file(root: &Path, name: &str) -> PathBuf {
    root.join(format!("{name}.csv"))
}
