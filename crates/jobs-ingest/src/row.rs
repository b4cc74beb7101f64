//! Flat CSV row shape for cleaned postings.
//!
//! CSV cells cannot hold a sequence, so `techtools` is stored as a
//! `;`-joined string on disk and expanded back to a `Vec` on read.

use serde::{Deserialize, Serialize};

use jobs_model::CleanPosting;

/// Separator for the joined `techtools` cell.
pub(crate) const TECHTOOLS_SEPARATOR: char = ';';

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CleanRow {
    min_salary: i64,
    max_salary: i64,
    med_salary: i64,
    range_salary: i64,
    company_name: String,
    rating: f64,
    location: String,
    headquarters: String,
    techtools: String,
}

impl From<&CleanPosting> for CleanRow {
    fn from(posting: &CleanPosting) -> Self {
        let mut techtools = String::new();
        for (pos, tag) in posting.techtools.iter().enumerate() {
            if pos > 0 {
                techtools.push(TECHTOOLS_SEPARATOR);
            }
            techtools.push_str(tag);
        }
        Self {
            min_salary: posting.min_salary,
            max_salary: posting.max_salary,
            med_salary: posting.med_salary,
            range_salary: posting.range_salary,
            company_name: posting.company_name.clone(),
            rating: posting.rating,
            location: posting.location.clone(),
            headquarters: posting.headquarters.clone(),
            techtools,
        }
    }
}

impl From<CleanRow> for CleanPosting {
    fn from(row: CleanRow) -> Self {
        let techtools = row
            .techtools
            .split(TECHTOOLS_SEPARATOR)
            .map(str::to_string)
            .collect();
        Self {
            min_salary: row.min_salary,
            max_salary: row.max_salary,
            med_salary: row.med_salary,
            range_salary: row.range_salary,
            company_name: row.company_name,
            rating: row.rating,
            location: row.location,
            headquarters: row.headquarters,
            techtools,
        }
    }
}
