//! End-to-end ingestion against the bundled choice tables.

use std::fs;
use std::path::{Path, PathBuf};

use census_cli::ingest::{IngestConfig, run_ingest};
use census_cli::input::collect_input_files;
use census_cli::types::StoreTarget;
use census_model::{EntityKind, FormKind, Record};
use census_store::{RecordStore, SqliteStore};
use tempfile::TempDir;

fn standards_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

fn config(inputs: Vec<PathBuf>, target: StoreTarget) -> IngestConfig {
    IngestConfig {
        form: FormKind::Building,
        inputs,
        target,
        strict: false,
        standards_root: standards_root(),
        choices_version: census_standards::DEFAULT_CHOICES_VERSION.to_string(),
    }
}

fn building(id: &str, ward: u32) -> String {
    format!(
        r#"{{"__id":"{id}","enumerator_name":"Enumerator A","building":{{"ward_no":{ward},"road_status":"graveled","natural_disasters":"flood","is_map_passed":"yes"}}}}"#
    )
}

#[test]
fn dry_run_reads_objects_arrays_and_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), building("uuid:b-1", 1)).unwrap();
    fs::write(
        dir.path().join("b.json"),
        format!("[{}, {}]", building("uuid:b-2", 2), building("uuid:b-3", 3)),
    )
    .unwrap();
    fs::write(
        dir.path().join("c.ndjson"),
        format!("{}\n\n{}\n", building("uuid:b-4", 4), building("uuid:b-5", 5)),
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let result = run_ingest(&config(vec![dir.path().to_path_buf()], StoreTarget::DryRun)).unwrap();

    assert_eq!(result.files, 3);
    assert_eq!(result.submissions, 5);
    assert_eq!(result.written.get(&EntityKind::Building), Some(&5));
    assert_eq!(result.choices_version, "2024-01");
    assert!(!result.has_errors());
}

#[test]
fn directory_files_are_sorted() {
    let dir = TempDir::new().unwrap();
    for name in ["z.jsonl", "a.json", "m.ndjson", "skip.csv"] {
        fs::write(dir.path().join(name), "").unwrap();
    }
    let files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|file| file.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.json", "m.ndjson", "z.jsonl"]);
}

#[test]
fn missing_and_unsupported_inputs_are_rejected() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("data.csv");
    fs::write(&csv, "").unwrap();
    assert!(collect_input_files(&[csv]).is_err());
    assert!(collect_input_files(&[dir.path().join("absent.json")]).is_err());
}

#[test]
fn bad_submissions_are_reported_and_the_batch_continues() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.ndjson");
    let lines = [
        building("uuid:b-1", 1),
        "{not json".to_string(),
        r#"{"building":{"ward_no":1}}"#.to_string(),
        r#"{"__id":"uuid:b-9","building":"collapsed"}"#.to_string(),
        building("uuid:b-2", 2),
    ];
    fs::write(&path, lines.join("\n")).unwrap();

    let result = run_ingest(&config(vec![path], StoreTarget::DryRun)).unwrap();

    assert_eq!(result.submissions, 5);
    assert_eq!(result.total_written(), 2);
    assert_eq!(result.failed.len(), 3);
    assert!(result.failed[0].location.ends_with("mixed.ndjson:2"));
    assert_eq!(result.failed[0].submission_id, None);
    assert_eq!(result.failed[2].submission_id.as_deref(), Some("uuid:b-9"));
    assert!(result.has_errors());
}

#[test]
fn unreadable_json_file_is_a_failed_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();

    let result = run_ingest(&config(vec![path], StoreTarget::DryRun)).unwrap();

    assert_eq!(result.submissions, 0);
    assert_eq!(result.failed.len(), 1);
    assert!(result.failed[0].location.ends_with("broken.json"));
}

#[test]
fn sqlite_target_persists_decoded_records() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("buildings.json");
    fs::write(&input, building("uuid:b-1", 4)).unwrap();
    let db = dir.path().join("census.db");

    let result = run_ingest(&config(vec![input.clone()], StoreTarget::Sqlite(db.clone()))).unwrap();
    assert_eq!(result.total_written(), 1);
    // Re-ingesting the same submission upserts in place.
    run_ingest(&config(vec![input], StoreTarget::Sqlite(db.clone()))).unwrap();

    let store = SqliteStore::open(&db).unwrap();
    assert_eq!(store.count(EntityKind::Building).unwrap(), 1);
    let Some(Record::Building(building)) = store.get(EntityKind::Building, "uuid:b-1").unwrap()
    else {
        panic!("expected a building record");
    };
    assert_eq!(building.ward_no, Some(4));
    assert_eq!(building.road_status.as_deref(), Some("Graveled"));
    assert_eq!(building.natural_disasters, Some(vec!["Flood".to_string()]));
    assert_eq!(building.is_map_passed, Some(true));
}

#[test]
fn unknown_choice_release_fails_before_reading_input() {
    let dir = TempDir::new().unwrap();
    let mut config = config(vec![dir.path().to_path_buf()], StoreTarget::DryRun);
    config.choices_version = "1999-01".to_string();
    let error = run_ingest(&config).unwrap_err();
    assert!(format!("{error:#}").contains("1999-01"));
}
