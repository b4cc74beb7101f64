//! CSV file writing with atomic replacement.
//!
//! Output is staged into a temp file in the destination directory and
//! renamed into place once every row has been written, so a failed run
//! never leaves a truncated dataset behind. An existing file at the target
//! path is overwritten.

use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use jobs_model::{CleanPosting, RawPosting};

use crate::error::{IngestError, Result};
use crate::row::CleanRow;

/// Write raw postings to `path`, replacing any existing file.
pub fn write_raw_postings(postings: &[RawPosting], path: &Path) -> Result<()> {
    write_records(postings.iter(), path)?;
    debug!(path = %path.display(), rows = postings.len(), "raw postings written");
    Ok(())
}

/// Write cleaned postings to `path`, replacing any existing file.
pub fn write_clean_postings(postings: &[CleanPosting], path: &Path) -> Result<()> {
    write_records(postings.iter().map(CleanRow::from), path)?;
    debug!(path = %path.display(), rows = postings.len(), "clean postings written");
    Ok(())
}

fn write_records<T, I>(records: I, path: &Path) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let staged = match dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_writer(staged);
    for record in records {
        writer.serialize(record).map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    let staged = writer.into_inner().map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    staged.persist(path).map_err(|e| IngestError::Persist {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}
