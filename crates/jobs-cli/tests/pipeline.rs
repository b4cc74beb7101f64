//! Integration tests running the four pipeline stages end to end.

use std::fs;

use tempfile::tempdir;

use jobs_cli::pipeline::{stage_clean, stage_index, stage_load, stage_unload};
use jobs_ingest::read_clean_postings;
use jobs_store::{BulkFileSink, CsvStagingStore};
use jobs_transform::{CleanOptions, MalformedRowPolicy};

const SOURCE_CSV: &str = "\
Salary Estimate,Company Name,Rating,Location,Headquarters,Job Description
\"$53K-$91K (Glassdoor est.)\",\"Tecolote Research
3.8\",3.8,\"Goleta, CA\",\"Goleta, CA\",Experience with Python and Kubernetes pipelines.
\"$53K-$91K (Glassdoor est.)\",\"Tecolote Research
3.8\",3.8,\"Goleta, CA\",\"Goleta, CA\",Experience with Python and Kubernetes pipelines.
$80K-$120K (est.),Initech,-1.0,\"Austin, TX\",-1,Airflow and ETL dashboards.
$70K-$90K (est.),Hooli,4.2,\"Palo Alto, CA\",\"Palo Alto, CA\",
Employer Provided Salary:$50K,Vandelay,3.0,\"New York, NY\",\"New York, NY\",Plain description.
";

#[test]
fn test_full_pipeline_with_drop_policy() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.csv");
    fs::write(&source, SOURCE_CSV).unwrap();

    let store = CsvStagingStore::new(dir.path().join("staging"));
    let sink = BulkFileSink::new(dir.path().join("index"));
    let raw_csv = dir.path().join("postings_raw.csv");
    let clean_csv = dir.path().join("postings_clean.csv");
    let options = CleanOptions {
        on_malformed_salary: MalformedRowPolicy::DropRow,
    };

    let staged = stage_load(&store, "postings_raw", &source).unwrap();
    assert_eq!(staged, 5);

    let unloaded = stage_unload(&store, "postings_raw", &raw_csv).unwrap();
    assert_eq!(unloaded, 5);

    let report = stage_clean(&raw_csv, Some(clean_csv.as_path()), &options).unwrap();
    assert_eq!(report.input_rows, 5);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.missing_dropped, 1);
    assert_eq!(report.malformed_dropped, 1);
    assert_eq!(report.postings.len(), 2);

    let cleaned = read_clean_postings(&clean_csv).unwrap();
    assert_eq!(cleaned.len(), 2);

    // Surviving input order is preserved.
    let first = &cleaned[0];
    assert_eq!(first.company_name, "Tecolote Research");
    assert_eq!(first.min_salary, 53);
    assert_eq!(first.max_salary, 91);
    assert_eq!(first.med_salary, 38);
    assert_eq!(first.range_salary, 72);
    assert_eq!(first.rating, 3.8);
    assert_eq!(
        first.techtools,
        vec!["python".to_string(), "kubernetes".to_string()]
    );

    let second = &cleaned[1];
    assert_eq!(second.company_name, "Initech");
    assert_eq!(second.rating, 0.0);
    assert_eq!(second.headquarters, "Austin, TX");
    assert_eq!(
        second.techtools,
        vec![
            "etl".to_string(),
            "airflow".to_string(),
            "dashboard".to_string(),
        ]
    );

    let documents = stage_index(&sink, "postings_clean", &clean_csv).unwrap();
    assert_eq!(documents, 2);

    let bulk = fs::read_to_string(sink.bulk_path("postings_clean")).unwrap();
    assert_eq!(bulk.lines().count(), 4);
    assert!(bulk.contains("\"_index\":\"postings_clean\""));
}

#[test]
fn test_abort_policy_fails_run_on_malformed_row() {
    let dir = tempdir().unwrap();
    let raw_csv = dir.path().join("raw.csv");
    fs::write(&raw_csv, SOURCE_CSV).unwrap();
    let clean_csv = dir.path().join("clean.csv");
    let options = CleanOptions {
        on_malformed_salary: MalformedRowPolicy::Abort,
    };

    let result = stage_clean(&raw_csv, Some(clean_csv.as_path()), &options);

    assert!(result.is_err());
    // An aborted run must not leave a partial cleaned artifact.
    assert!(!clean_csv.exists());
}

#[test]
fn test_clean_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let raw_csv = dir.path().join("raw.csv");
    fs::write(&raw_csv, SOURCE_CSV).unwrap();
    let options = CleanOptions {
        on_malformed_salary: MalformedRowPolicy::DropRow,
    };

    let report = stage_clean(&raw_csv, None, &options).unwrap();

    assert_eq!(report.postings.len(), 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_stage_load_missing_source_fails() {
    let dir = tempdir().unwrap();
    let store = CsvStagingStore::new(dir.path().join("staging"));
    let result = stage_load(&store, "postings_raw", &dir.path().join("absent.csv"));
    assert!(result.is_err());
}
