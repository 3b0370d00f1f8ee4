// src/pipeline.rs
//! End-to-end analysis run: adapters → analyzers → aggregated report.
//!
//! Adapter failures degrade the run instead of aborting it: a failed
//! detection pass counts as "nothing detected" and a failed extraction
//! pass leaves every parameter value absent. Conformity is then computed
//! honestly over what remains, and the failure is surfaced as a warning
//! alongside the report.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::adapters::{ElementDetector, ParameterExtractor};
use crate::analysis::{aggregate, graphical, parameters};
use crate::catalog;
use crate::types::{OverallReport, ProjectMeta};

/// A completed run: the report plus any degraded-mode warnings.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: OverallReport,
    pub warnings: Vec<String>,
}

/// Runs both adapters over the submission files and aggregates the results.
#[must_use]
pub fn run_analysis(
    detector: &dyn ElementDetector,
    extractor: &dyn ParameterExtractor,
    files: &[PathBuf],
    project: ProjectMeta,
) -> AnalysisOutcome {
    let project_type = project.project_type;
    let mut warnings = Vec::new();

    let detected = match detector.detect(files, project_type) {
        Ok(ids) => ids,
        Err(e) => {
            warnings.push(format!("element detection failed, treating as none detected: {e}"));
            BTreeSet::new()
        }
    };
    let graphical_result = graphical::analyze(&detected, &BTreeSet::new());

    let extracted = match extractor.extract(files, project_type) {
        Ok(categories) => categories,
        Err(e) => {
            warnings.push(format!("parameter extraction failed, no values populated: {e}"));
            catalog::parameter_catalog(project_type)
        }
    };
    let parameter_result = parameters::analyze(&extracted);

    let report = aggregate::aggregate(project, Some(graphical_result), Some(parameter_result));
    AnalysisOutcome { report, warnings }
}
