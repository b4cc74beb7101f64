//! Data model for the job-postings pipeline.

pub mod record;
pub mod sentinel;

pub use record::{CleanPosting, RawPosting};
pub use sentinel::{RATING_MISSING, TEXT_MISSING, known_rating, known_text};
