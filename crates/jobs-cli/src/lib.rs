//! Library surface of the job-postings ETL CLI: pipeline stages, logging
//! setup, and run summaries.

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
