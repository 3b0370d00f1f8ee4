// src/reporting.rs
//! Console rendering of the overall report.
//!
//! Rendering only reads what the aggregator produced; it never recomputes
//! conformity. Band colors follow the classification thresholds: green at
//! or above 90, yellow at or above 70, red below.

use colored::{ColoredString, Colorize};

use crate::types::{
    Classification, GraphicalResult, OverallReport, ParameterResult, APPROVED_THRESHOLD,
    RESERVATIONS_THRESHOLD,
};

fn percent_colored(percent: f64) -> ColoredString {
    let text = format!("{percent:.1}%");
    if percent >= APPROVED_THRESHOLD {
        text.green().bold()
    } else if percent >= RESERVATIONS_THRESHOLD {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn classification_colored(classification: Classification) -> ColoredString {
    let label = classification.label();
    match classification {
        Classification::Approved => label.green().bold(),
        Classification::ApprovedWithReservations => label.yellow().bold(),
        Classification::Rejected => label.red().bold(),
    }
}

fn recommendation(classification: Classification) -> &'static str {
    match classification {
        Classification::Approved => {
            "The project complies with the municipal regulations covered by this \
             analysis and can proceed to formal submission."
        }
        Classification::ApprovedWithReservations => {
            "The project has non-conformities that must be corrected before formal \
             submission. Review the items listed above."
        }
        Classification::Rejected => {
            "The project has several non-conformities and must be revised before \
             resubmission. Review every item listed above."
        }
    }
}

fn print_graphical_section(result: &GraphicalResult) {
    println!(
        "\n{} {}",
        "Graphical representation:".bold(),
        percent_colored(result.conformity_percent)
    );
    if result.missing_required.is_empty() {
        println!("  every required element verified");
        return;
    }
    println!(
        "  {} required element(s) missing:",
        result.missing_required.len()
    );
    for element in &result.missing_required {
        println!("    {} {}", "✗".red(), element.name);
    }
}

fn print_parameter_section(result: &ParameterResult) {
    println!(
        "\n{} {}",
        "Urban parameters:".bold(),
        percent_colored(result.conformity_percent)
    );
    if result.non_conformant.is_empty() {
        println!("  every evaluated parameter conformant");
        return;
    }
    println!(
        "  {} non-conformant parameter(s):",
        result.non_conformant.len()
    );
    for parameter in &result.non_conformant {
        let value = parameter
            .project_value
            .map_or_else(|| "-".to_string(), |v| format!("{v}"));
        let bound = match parameter.comparison {
            crate::types::ComparisonMode::Minimum => "min",
            crate::types::ComparisonMode::Maximum => "max",
        };
        println!(
            "    {} {}: {}{} ({} {}{})",
            "✗".red(),
            parameter.name,
            value,
            parameter.unit,
            bound,
            parameter.reference_value,
            parameter.unit
        );
    }
}

/// Prints the full report to stdout, warnings first.
pub fn print_report(report: &OverallReport, warnings: &[String]) {
    for warning in warnings {
        println!("{} {warning}", "warning:".yellow().bold());
    }

    println!(
        "\n{} {} ({})",
        "Project:".bold(),
        report.project.name,
        report.project.project_type.label()
    );

    if let Some(graphical) = &report.graphical {
        print_graphical_section(graphical);
    }
    if let Some(parameters) = &report.parameters {
        print_parameter_section(parameters);
    }

    println!("{}", "---------------------------------------------------".dimmed());
    println!(
        "{} {}   {} {}",
        "Overall conformity:".bold(),
        percent_colored(report.overall_conformity),
        "Classification:".bold(),
        classification_colored(report.classification)
    );
    println!("\n{}", recommendation(report.classification));
}
