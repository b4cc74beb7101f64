//! The `clean_raw_data` transform: filtering entry step plus the pure
//! per-record normalization.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use jobs_model::{CleanPosting, RawPosting};

use crate::company::{normalize_rating, primary_company_name, resolve_headquarters};
use crate::error::{Result, TransformError};
use crate::salary::{SalaryParseReason, parse_salary_estimate};
use crate::skills::extract_techtools;

/// What to do with a row whose salary estimate fails to parse.
///
/// There is no default: the caller must pick one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Fail the whole batch on the first malformed row.
    Abort,
    /// Drop the malformed row and continue; drops are counted and logged.
    DropRow,
}

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Copy)]
pub struct CleanOptions {
    pub on_malformed_salary: MalformedRowPolicy,
}

/// Cleaned records plus counters for everything removed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanReport {
    /// One record per surviving input row, in surviving input order.
    pub postings: Vec<CleanPosting>,
    pub input_rows: usize,
    pub duplicates_dropped: usize,
    pub missing_dropped: usize,
    pub malformed_dropped: usize,
}

/// Normalize a batch of raw postings.
///
/// Entry step: exact-duplicate rows are dropped (first occurrence wins),
/// then rows with any missing field. Neither is an error. Each surviving
/// row then goes through [`clean_record`]; a salary parse failure is
/// handled per [`CleanOptions::on_malformed_salary`].
pub fn clean_raw_data(records: &[RawPosting], options: &CleanOptions) -> Result<CleanReport> {
    let input_rows = records.len();

    let mut seen = BTreeSet::new();
    let mut duplicates_dropped = 0usize;
    let mut missing_dropped = 0usize;
    let mut surviving: Vec<(usize, &RawPosting)> = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        if !seen.insert(dedupe_key(record)) {
            duplicates_dropped += 1;
            continue;
        }
        if record.has_missing_fields() {
            missing_dropped += 1;
            continue;
        }
        surviving.push((row, record));
    }

    let mut postings = Vec::with_capacity(surviving.len());
    let mut malformed_dropped = 0usize;
    for (row, record) in surviving {
        match clean_record(record) {
            Ok(posting) => postings.push(posting),
            Err(reason) => match options.on_malformed_salary {
                MalformedRowPolicy::Abort => {
                    return Err(TransformError::MalformedSalary {
                        row,
                        value: record.salary_estimate.clone(),
                        reason,
                    });
                }
                MalformedRowPolicy::DropRow => {
                    warn!(
                        row,
                        value = %record.salary_estimate,
                        reason = %reason,
                        "dropping row with malformed salary estimate"
                    );
                    malformed_dropped += 1;
                }
            },
        }
    }

    debug!(
        input_rows,
        output_rows = postings.len(),
        duplicates_dropped,
        missing_dropped,
        malformed_dropped,
        "cleaning complete"
    );

    Ok(CleanReport {
        postings,
        input_rows,
        duplicates_dropped,
        missing_dropped,
        malformed_dropped,
    })
}

/// Pure per-record normalization. No shared state, so a batch can be
/// partitioned and fanned out without ordering dependencies.
pub fn clean_record(raw: &RawPosting) -> std::result::Result<CleanPosting, SalaryParseReason> {
    let range = parse_salary_estimate(&raw.salary_estimate)?;
    let location = raw.location.clone();
    let headquarters = resolve_headquarters(raw.known_headquarters(), &location).to_string();
    Ok(CleanPosting {
        min_salary: range.min,
        max_salary: range.max,
        med_salary: range.spread(),
        range_salary: range.midpoint(),
        company_name: primary_company_name(&raw.company_name).to_string(),
        rating: normalize_rating(raw.known_rating()),
        location,
        headquarters,
        techtools: extract_techtools(&raw.job_description),
    })
}

/// Composite key over every column, used for exact-duplicate detection.
fn dedupe_key(record: &RawPosting) -> String {
    format!(
        "{}|{}|{:?}|{}|{}|{}",
        record.salary_estimate,
        record.company_name,
        record.rating,
        record.location,
        record.headquarters,
        record.job_description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::TECHTOOLS_NONE;

    fn raw_posting() -> RawPosting {
        RawPosting {
            salary_estimate: "$53K-$91K (Glassdoor est.)".to_string(),
            company_name: "Tecolote Research\n3.8".to_string(),
            rating: Some(3.8),
            location: "Goleta, CA".to_string(),
            headquarters: "Goleta, CA".to_string(),
            job_description: "Experience with Python and Kubernetes.".to_string(),
        }
    }

    fn abort_options() -> CleanOptions {
        CleanOptions {
            on_malformed_salary: MalformedRowPolicy::Abort,
        }
    }

    #[test]
    fn test_clean_record_salary_fields() {
        let posting = clean_record(&raw_posting()).unwrap();
        assert_eq!(posting.min_salary, 53);
        assert_eq!(posting.max_salary, 91);
        assert_eq!(posting.med_salary, 38);
        assert_eq!(posting.range_salary, 72);
    }

    #[test]
    fn test_clean_record_company_fields() {
        let posting = clean_record(&raw_posting()).unwrap();
        assert_eq!(posting.company_name, "Tecolote Research");
        assert_eq!(posting.rating, 3.8);
        assert_eq!(posting.location, "Goleta, CA");
        assert_eq!(posting.headquarters, "Goleta, CA");
    }

    #[test]
    fn test_clean_record_rating_sentinel() {
        let mut raw = raw_posting();
        raw.rating = Some(-1.0);
        let posting = clean_record(&raw).unwrap();
        assert_eq!(posting.rating, 0.0);
    }

    #[test]
    fn test_clean_record_headquarters_sentinel() {
        let mut raw = raw_posting();
        raw.headquarters = "-1".to_string();
        let posting = clean_record(&raw).unwrap();
        assert_eq!(posting.headquarters, posting.location);
    }

    #[test]
    fn test_clean_record_techtools() {
        let posting = clean_record(&raw_posting()).unwrap();
        assert_eq!(
            posting.techtools,
            vec!["python".to_string(), "kubernetes".to_string()]
        );
    }

    #[test]
    fn test_clean_record_techtools_never_empty() {
        let mut raw = raw_posting();
        raw.job_description = "Great benefits.".to_string();
        let posting = clean_record(&raw).unwrap();
        assert_eq!(posting.techtools, vec![TECHTOOLS_NONE.to_string()]);
    }

    #[test]
    fn test_duplicates_dropped_first_occurrence_wins() {
        let mut second = raw_posting();
        second.job_description = "Different description, Python.".to_string();
        let records = vec![raw_posting(), raw_posting(), second];

        let report = clean_raw_data(&records, &abort_options()).unwrap();

        assert_eq!(report.input_rows, 3);
        assert_eq!(report.duplicates_dropped, 1);
        assert_eq!(report.postings.len(), 2);
    }

    #[test]
    fn test_missing_rows_dropped_without_error() {
        let mut incomplete = raw_posting();
        incomplete.rating = None;
        let records = vec![raw_posting(), incomplete];

        let report = clean_raw_data(&records, &abort_options()).unwrap();

        assert_eq!(report.missing_dropped, 1);
        assert_eq!(report.postings.len(), 1);
    }

    #[test]
    fn test_output_preserves_surviving_order() {
        let mut first = raw_posting();
        first.company_name = "Alpha\n4.0".to_string();
        let mut second = raw_posting();
        second.company_name = "Beta".to_string();
        let mut third = raw_posting();
        third.company_name = "Gamma\n2.5".to_string();

        let report =
            clean_raw_data(&[first, second, third], &abort_options()).unwrap();

        let names: Vec<&str> = report
            .postings
            .iter()
            .map(|posting| posting.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_malformed_salary_aborts_batch() {
        let mut malformed = raw_posting();
        malformed.salary_estimate = "Employer Provided Salary:$50K".to_string();
        let records = vec![raw_posting(), malformed];

        let result = clean_raw_data(&records, &abort_options());

        match result {
            Err(TransformError::MalformedSalary { row, value, reason }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "Employer Provided Salary:$50K");
                assert_eq!(reason, SalaryParseReason::NoSeparator);
            }
            other => panic!("expected MalformedSalary, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_salary_drop_policy() {
        let mut malformed = raw_posting();
        malformed.salary_estimate = "Employer Provided Salary:$50K".to_string();
        let records = vec![raw_posting(), malformed];
        let options = CleanOptions {
            on_malformed_salary: MalformedRowPolicy::DropRow,
        };

        let report = clean_raw_data(&records, &options).unwrap();

        assert_eq!(report.malformed_dropped, 1);
        assert_eq!(report.postings.len(), 1);
    }

    #[test]
    fn test_reentrant_on_independent_batches() {
        let records = vec![raw_posting()];
        let first = clean_raw_data(&records, &abort_options()).unwrap();
        let second = clean_raw_data(&records, &abort_options()).unwrap();
        assert_eq!(first, second);
    }
}
