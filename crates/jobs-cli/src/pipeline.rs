//! Pipeline stages with explicit sequencing.
//!
//! One run executes four stages in strict order:
//! 1. **stage-load**: source CSV into the staging table
//! 2. **stage-unload**: staging table back out to a raw CSV
//! 3. **stage-clean**: raw CSV through the normalization core to a cleaned CSV
//! 4. **stage-index**: cleaned CSV into the search index as bulk documents
//!
//! Retries belong to the scheduler loop here, never to the stages or the
//! transform itself: [`run_stage_with_retry`] owns the attempt count and
//! backoff.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use jobs_ingest::{read_clean_postings, read_raw_postings, write_clean_postings, write_raw_postings};
use jobs_store::{SearchIndexSink, StagingStore};
use jobs_transform::{CleanOptions, CleanReport, clean_raw_data};

/// Load the source CSV and replace the named staging table with it.
pub fn stage_load(store: &impl StagingStore, table: &str, source: &Path) -> Result<usize> {
    let span = info_span!("stage_load", table, source = %source.display());
    let _guard = span.enter();
    let start = Instant::now();
    let postings =
        read_raw_postings(source).with_context(|| format!("read {}", source.display()))?;
    store
        .replace_table(table, &postings)
        .with_context(|| format!("replace staging table {table}"))?;
    info!(
        table,
        rows = postings.len(),
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(postings.len())
}

/// Fetch the staging table and write it out as the raw CSV.
pub fn stage_unload(store: &impl StagingStore, table: &str, raw_csv: &Path) -> Result<usize> {
    let span = info_span!("stage_unload", table, raw_csv = %raw_csv.display());
    let _guard = span.enter();
    let start = Instant::now();
    let postings = store
        .fetch_table(table)
        .with_context(|| format!("fetch staging table {table}"))?;
    write_raw_postings(&postings, raw_csv)
        .with_context(|| format!("write {}", raw_csv.display()))?;
    info!(
        table,
        rows = postings.len(),
        duration_ms = start.elapsed().as_millis(),
        "unload complete"
    );
    Ok(postings.len())
}

/// Run the normalization core over the raw CSV.
///
/// With `clean_csv = None` the transform still runs in full but nothing is
/// written (dry run). The cleaned file only ever appears complete: the
/// writer stages and renames, so a mid-run failure leaves no partial
/// artifact.
pub fn stage_clean(
    raw_csv: &Path,
    clean_csv: Option<&Path>,
    options: &CleanOptions,
) -> Result<CleanReport> {
    let span = info_span!("stage_clean", raw_csv = %raw_csv.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records =
        read_raw_postings(raw_csv).with_context(|| format!("read {}", raw_csv.display()))?;
    let report = clean_raw_data(&records, options).context("clean raw data")?;
    if let Some(path) = clean_csv {
        write_clean_postings(&report.postings, path)
            .with_context(|| format!("write {}", path.display()))?;
    }
    info!(
        input_rows = report.input_rows,
        output_rows = report.postings.len(),
        duplicates_dropped = report.duplicates_dropped,
        missing_dropped = report.missing_dropped,
        malformed_dropped = report.malformed_dropped,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(report)
}

/// Read the cleaned CSV and bulk-index each row as one document.
pub fn stage_index(sink: &impl SearchIndexSink, index: &str, clean_csv: &Path) -> Result<usize> {
    let span = info_span!("stage_index", index, clean_csv = %clean_csv.display());
    let _guard = span.enter();
    let start = Instant::now();
    let postings =
        read_clean_postings(clean_csv).with_context(|| format!("read {}", clean_csv.display()))?;
    let documents = sink
        .bulk_index(index, &postings)
        .with_context(|| format!("bulk index into {index}"))?;
    info!(
        index,
        documents,
        duration_ms = start.elapsed().as_millis(),
        "index complete"
    );
    Ok(documents)
}

/// Retry behavior for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff: Duration::from_secs(5),
        }
    }
}

/// Run one stage under the retry policy.
///
/// Returns the stage result and the number of attempts used. The last
/// error is returned once the policy is exhausted; earlier failures are
/// logged at warn level.
pub fn run_stage_with_retry<T>(
    policy: &RetryPolicy,
    stage: &'static str,
    mut attempt_fn: impl FnMut() -> Result<T>,
) -> Result<(T, u32)> {
    let max_attempts = policy.max_retries.saturating_add(1);
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match attempt_fn() {
            Ok(value) => return Ok((value, attempt)),
            Err(error) if attempt < max_attempts => {
                warn!(
                    stage,
                    attempt,
                    max_attempts,
                    backoff_secs = policy.backoff.as_secs(),
                    error = %format!("{error:#}"),
                    "stage failed, retrying"
                );
                thread::sleep(policy.backoff);
            }
            Err(error) => {
                return Err(error.context(format!("{stage} failed after {attempt} attempt(s)")));
            }
        }
    }
}
