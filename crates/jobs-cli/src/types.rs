//! Result types shared by the pipeline commands and the summary printer.

use std::path::PathBuf;

/// One stage of a pipeline run.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    /// Stage name as scheduled (e.g. `stage-load`).
    pub stage: &'static str,
    /// Rows (or documents) the stage moved.
    pub rows: usize,
    /// Attempts used, including the successful one.
    pub attempts: u32,
    pub duration_ms: u128,
}

/// Counters from the cleaning stage.
#[derive(Debug, Clone, Default)]
pub struct CleanSummary {
    pub input_rows: usize,
    pub duplicates_dropped: usize,
    pub missing_dropped: usize,
    pub malformed_dropped: usize,
    pub output_rows: usize,
    /// Where the cleaned dataset was written; `None` on a dry run.
    pub output_path: Option<PathBuf>,
}

/// Result of a full four-stage pipeline run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub work_dir: PathBuf,
    pub raw_csv: PathBuf,
    pub clean_csv: PathBuf,
    pub bulk_file: PathBuf,
    pub documents_indexed: usize,
    pub stages: Vec<StageOutcome>,
    pub clean: CleanSummary,
}
