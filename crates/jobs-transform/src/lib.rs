//! The normalization core of the job-postings pipeline.
//!
//! [`clean_raw_data`] takes a batch of raw postings and produces cleaned
//! records: compound salary strings become typed integer ranges, sentinel
//! values are reconciled across related columns, and a fixed skill
//! vocabulary is matched against the free-text description. The transform
//! is a pure per-record function with no shared state across rows, so
//! output order always equals surviving input order.

pub mod clean;
pub mod company;
pub mod error;
pub mod salary;
pub mod skills;

pub use clean::{CleanOptions, CleanReport, MalformedRowPolicy, clean_raw_data, clean_record};
pub use error::{Result, TransformError};
pub use salary::{SalaryParseReason, SalaryRange, parse_salary_estimate};
pub use skills::{SKILL_VOCABULARY, TECHTOOLS_NONE, extract_techtools};
