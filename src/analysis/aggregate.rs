// src/analysis/aggregate.rs
//! Report aggregation: combines the two analyzer outputs into an overall
//! conformity score and a three-tier approval classification.

use crate::types::{Classification, GraphicalResult, OverallReport, ParameterResult, ProjectMeta};

/// Combines whichever analyzer results are present into an overall report.
///
/// The overall conformity is the unweighted mean of the present results'
/// percentages. With neither present it is 0 and the classification is
/// rejected — never an average over an empty set.
#[must_use]
pub fn aggregate(
    project: ProjectMeta,
    graphical: Option<GraphicalResult>,
    parameters: Option<ParameterResult>,
) -> OverallReport {
    let mut total = 0.0;
    let mut count = 0_u32;

    if let Some(result) = &graphical {
        total += result.conformity_percent;
        count += 1;
    }
    if let Some(result) = &parameters {
        total += result.conformity_percent;
        count += 1;
    }

    let overall_conformity = if count > 0 {
        total / f64::from(count)
    } else {
        0.0
    };

    OverallReport {
        project,
        graphical,
        parameters,
        overall_conformity,
        classification: Classification::from_conformity(overall_conformity),
    }
}
