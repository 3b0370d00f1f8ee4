// tests/unit_store.rs
//! Unit tests for the JSON-file store: id generation, owner scoping, and
//! report/project round trips.

use plancheck_core::analysis::aggregate::aggregate;
use plancheck_core::project::{Project, ProjectStatus};
use plancheck_core::store::{generate_id, next_timestamp_ms, Store};
use plancheck_core::types::{
    Classification, GraphicalResult, ProjectMeta, ProjectType,
};
use tempfile::TempDir;

fn sample_report(percent: f64) -> plancheck_core::types::OverallReport {
    aggregate(
        ProjectMeta {
            name: "Galpão Gama".to_string(),
            project_type: ProjectType::Industrial,
        },
        Some(GraphicalResult {
            categories: Vec::new(),
            conformity_percent: percent,
            missing_required: Vec::new(),
        }),
        None,
    )
}

#[test]
fn test_report_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let saved = store.save_report("alice", &sample_report(92.5)).unwrap();
    assert!(saved.id.starts_with("report-"), "id is <kind>-<timestamp>");

    let loaded = store.get_report("alice", &saved.id).unwrap();
    assert_eq!(loaded.owner_id, "alice");
    assert!((loaded.report.overall_conformity - 92.5).abs() < 1e-9);
    assert_eq!(loaded.report.classification, Classification::Approved);
}

#[test]
fn test_owner_scoping() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let saved = store.save_report("alice", &sample_report(80.0)).unwrap();

    // Another owner can neither read nor list the record.
    assert!(store.get_report("bob", &saved.id).is_err());
    assert!(store.list_reports("bob").unwrap().is_empty());
    assert_eq!(store.list_reports("alice").unwrap().len(), 1);
}

#[test]
fn test_ids_unique_within_one_millisecond() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let first = store.save_report("alice", &sample_report(50.0)).unwrap();
    let second = store.save_report("alice", &sample_report(60.0)).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.list_reports("alice").unwrap().len(), 2);
}

#[test]
fn test_list_reports_oldest_first() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    store.save_report("alice", &sample_report(10.0)).unwrap();
    store.save_report("alice", &sample_report(20.0)).unwrap();
    store.save_report("alice", &sample_report(30.0)).unwrap();

    let listed = store.list_reports("alice").unwrap();
    let percents: Vec<f64> = listed
        .iter()
        .map(|r| r.report.overall_conformity)
        .collect();
    assert_eq!(percents, vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_missing_report_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();
    assert!(store.get_report("alice", "report-0").is_err());
}

#[test]
fn test_project_lifecycle_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let mut project = Project::new("alice", "Sobrado Delta", ProjectType::MixedUse);
    assert!(project.id.starts_with("project-"));
    assert_eq!(project.status, ProjectStatus::Pending);

    store.save_project(&project).unwrap();
    let loaded = store.get_project("alice", &project.id).unwrap();
    assert_eq!(loaded.status, ProjectStatus::Pending);

    project.mark_analyzed(Classification::ApprovedWithReservations, next_timestamp_ms());
    store.save_project(&project).unwrap();

    let loaded = store.get_project("alice", &project.id).unwrap();
    assert_eq!(loaded.status, ProjectStatus::ApprovedWithReservations);
    assert!(loaded.analyzed_at_ms.is_some());

    assert_eq!(store.list_projects("alice").unwrap().len(), 1);
    assert!(store.list_projects("bob").unwrap().is_empty());
}

#[test]
fn test_generate_id_format() {
    assert_eq!(generate_id("report", 1_724_000_000_000), "report-1724000000000");
}

#[test]
fn test_next_timestamp_is_monotonic() {
    let a = next_timestamp_ms();
    let b = next_timestamp_ms();
    assert!(b > a);
}
