//! CSV file reading into typed posting records.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use jobs_model::{CleanPosting, RawPosting};

use crate::error::{IngestError, Result};
use crate::row::CleanRow;

/// Read the source/raw postings dataset.
///
/// Columns are matched by header name, so extra columns in the source file
/// are ignored. Fails with [`IngestError::EmptyCsv`] when the file holds a
/// header but no data rows.
pub fn read_raw_postings(path: &Path) -> Result<Vec<RawPosting>> {
    let postings: Vec<RawPosting> = read_records(path)?;
    debug!(path = %path.display(), rows = postings.len(), "raw postings read");
    Ok(postings)
}

/// Read a cleaned postings dataset written by [`crate::write_clean_postings`].
pub fn read_clean_postings(path: &Path) -> Result<Vec<CleanPosting>> {
    let rows: Vec<CleanRow> = read_records(path)?;
    let postings: Vec<CleanPosting> = rows.into_iter().map(CleanPosting::from).collect();
    debug!(path = %path.display(), rows = postings.len(), "clean postings read");
    Ok(postings)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = open_file(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(record);
    }
    if records.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
