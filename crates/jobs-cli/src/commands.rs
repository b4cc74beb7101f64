//! Command implementations for the ETL CLI.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use jobs_store::{BulkFileSink, CsvStagingStore};
use jobs_transform::skills::MatchKind;
use jobs_transform::{CleanOptions, MalformedRowPolicy, SKILL_VOCABULARY};

use jobs_cli::pipeline::{
    RetryPolicy, run_stage_with_retry, stage_clean, stage_index, stage_load, stage_unload,
};
use jobs_cli::summary::apply_table_style;
use jobs_cli::types::{CleanSummary, RunResult, StageOutcome};

use crate::cli::{CleanArgs, RunArgs};

/// Run the four stages in strict sequence under the retry policy.
pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", source = %args.source.display());
    let _run_guard = run_span.enter();

    let work_dir = args
        .work_dir
        .clone()
        .unwrap_or_else(|| default_sibling(&args.source, "work"));
    std::fs::create_dir_all(&work_dir)
        .with_context(|| format!("create work dir {}", work_dir.display()))?;

    let store = CsvStagingStore::new(work_dir.join("staging"));
    let sink = BulkFileSink::new(work_dir.join("index"));
    let raw_csv = work_dir.join("postings_raw.csv");
    let clean_csv = work_dir.join("postings_clean.csv");
    let bulk_file = sink.bulk_path(&args.index);

    let policy = RetryPolicy {
        max_retries: args.max_retries,
        backoff: Duration::from_secs(args.retry_backoff_secs),
    };
    let options = CleanOptions {
        on_malformed_salary: malformed_policy(args.drop_malformed),
    };

    let mut stages = Vec::new();

    let start = Instant::now();
    let (rows, attempts) = run_stage_with_retry(&policy, "stage-load", || {
        stage_load(&store, &args.staging_table, &args.source)
    })?;
    stages.push(outcome("stage-load", rows, attempts, start));

    let start = Instant::now();
    let (rows, attempts) = run_stage_with_retry(&policy, "stage-unload", || {
        stage_unload(&store, &args.staging_table, &raw_csv)
    })?;
    stages.push(outcome("stage-unload", rows, attempts, start));

    let start = Instant::now();
    let (report, attempts) = run_stage_with_retry(&policy, "stage-clean", || {
        stage_clean(&raw_csv, Some(clean_csv.as_path()), &options)
    })?;
    stages.push(outcome("stage-clean", report.postings.len(), attempts, start));

    let start = Instant::now();
    let (documents_indexed, attempts) = run_stage_with_retry(&policy, "stage-index", || {
        stage_index(&sink, &args.index, &clean_csv)
    })?;
    stages.push(outcome("stage-index", documents_indexed, attempts, start));

    info!(
        work_dir = %work_dir.display(),
        documents_indexed,
        "pipeline run complete"
    );

    Ok(RunResult {
        work_dir,
        raw_csv,
        clean_csv: clean_csv.clone(),
        bulk_file,
        documents_indexed,
        stages,
        clean: CleanSummary {
            input_rows: report.input_rows,
            duplicates_dropped: report.duplicates_dropped,
            missing_dropped: report.missing_dropped,
            malformed_dropped: report.malformed_dropped,
            output_rows: report.postings.len(),
            output_path: Some(clean_csv),
        },
    })
}

/// Run only the cleaning stage.
pub fn run_clean(args: &CleanArgs) -> Result<CleanSummary> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_sibling(&args.input, "cleaned.csv"));
    let options = CleanOptions {
        on_malformed_salary: malformed_policy(args.drop_malformed),
    };
    let target = if args.dry_run { None } else { Some(&output) };
    let report = stage_clean(&args.input, target.map(PathBuf::as_path), &options)?;
    Ok(CleanSummary {
        input_rows: report.input_rows,
        duplicates_dropped: report.duplicates_dropped,
        missing_dropped: report.missing_dropped,
        malformed_dropped: report.malformed_dropped,
        output_rows: report.postings.len(),
        output_path: if args.dry_run { None } else { Some(output) },
    })
}

/// Print the skill vocabulary in extraction order.
pub fn run_skills() {
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Match"]);
    apply_table_style(&mut table);
    for token in SKILL_VOCABULARY {
        let kind = match token.kind {
            MatchKind::Substring => "substring",
            MatchKind::ExactWord => "exact word",
        };
        table.add_row(vec![token.tag, kind]);
    }
    println!("{table}");
}

fn malformed_policy(drop_malformed: bool) -> MalformedRowPolicy {
    if drop_malformed {
        MalformedRowPolicy::DropRow
    } else {
        MalformedRowPolicy::Abort
    }
}

fn outcome(stage: &'static str, rows: usize, attempts: u32, start: Instant) -> StageOutcome {
    StageOutcome {
        stage,
        rows,
        attempts,
        duration_ms: start.elapsed().as_millis(),
    }
}

fn default_sibling(path: &std::path::Path, name: &str) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}
