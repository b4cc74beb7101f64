//! Tabular loading and writing: CSV files in, typed posting records out.

pub mod error;
pub mod reader;
mod row;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_clean_postings, read_raw_postings};
pub use writer::{write_clean_postings, write_raw_postings};
