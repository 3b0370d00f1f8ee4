// tests/unit_aggregate.rs
//! Unit tests for report aggregation and classification bands.

use plancheck_core::analysis::aggregate::aggregate;
use plancheck_core::types::{
    Classification, GraphicalResult, ParameterResult, ProjectMeta, ProjectType,
};

fn meta() -> ProjectMeta {
    ProjectMeta {
        name: "Casa Alfa".to_string(),
        project_type: ProjectType::ResidentialSingleFamily,
    }
}

fn graphical(percent: f64) -> GraphicalResult {
    GraphicalResult {
        categories: Vec::new(),
        conformity_percent: percent,
        missing_required: Vec::new(),
    }
}

fn parameters(percent: f64) -> ParameterResult {
    ParameterResult {
        categories: Vec::new(),
        conformity_percent: percent,
        non_conformant: Vec::new(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_both_present_unweighted_mean() {
    let report = aggregate(meta(), Some(graphical(85.7)), Some(parameters(75.0)));
    assert!(
        approx(report.overall_conformity, 80.35),
        "got {}",
        report.overall_conformity
    );
    assert_eq!(
        report.classification,
        Classification::ApprovedWithReservations
    );
}

#[test]
fn test_single_result_passes_through_exactly() {
    let report = aggregate(meta(), Some(graphical(95.0)), None);
    assert!(approx(report.overall_conformity, 95.0));
    assert_eq!(report.classification, Classification::Approved);

    let report = aggregate(meta(), None, Some(parameters(42.0)));
    assert!(approx(report.overall_conformity, 42.0));
    assert_eq!(report.classification, Classification::Rejected);
}

#[test]
fn test_neither_present_is_rejected_zero() {
    let report = aggregate(meta(), None, None);
    assert!(approx(report.overall_conformity, 0.0));
    assert_eq!(report.classification, Classification::Rejected);
}

#[test]
fn test_band_boundaries_belong_to_higher_band() {
    assert_eq!(Classification::from_conformity(90.0), Classification::Approved);
    assert_eq!(
        Classification::from_conformity(89.999),
        Classification::ApprovedWithReservations
    );
    assert_eq!(
        Classification::from_conformity(70.0),
        Classification::ApprovedWithReservations
    );
    assert_eq!(
        Classification::from_conformity(69.999),
        Classification::Rejected
    );
    assert_eq!(Classification::from_conformity(100.0), Classification::Approved);
    assert_eq!(Classification::from_conformity(0.0), Classification::Rejected);
}

#[test]
fn test_report_carries_sub_results_untouched() {
    let report = aggregate(meta(), Some(graphical(60.0)), Some(parameters(80.0)));
    assert!(approx(report.graphical.as_ref().unwrap().conformity_percent, 60.0));
    assert!(approx(
        report.parameters.as_ref().unwrap().conformity_percent,
        80.0
    ));
    assert!(approx(report.overall_conformity, 70.0));
    assert_eq!(
        report.classification,
        Classification::ApprovedWithReservations
    );
}
