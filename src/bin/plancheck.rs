// src/bin/plancheck.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use plancheck_core::adapters::{SimulatedDetector, SimulatedExtractor};
use plancheck_core::cli::{AnalyzeArgs, CatalogArgs, Cli, Commands, ReportsArgs};
use plancheck_core::types::{Classification, ProjectMeta, ProjectType};
use plancheck_core::{catalog, discovery, pipeline, reporting, store};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Catalog(args) => run_catalog(&args),
        Commands::Reports(args) => run_reports(&args),
    }
}

fn resolve_project_type(slug: &str) -> ProjectType {
    match ProjectType::parse(slug) {
        Some(project_type) => project_type,
        None => {
            let fallback = ProjectType::ResidentialSingleFamily;
            println!(
                "{} unknown project type '{slug}', using {}",
                "notice:".yellow(),
                fallback.slug()
            );
            fallback
        }
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let project_type = resolve_project_type(&args.project_type);

    let files = discovery::collect_submission_files(&args.path)?;
    if files.is_empty() {
        println!("No submission files found under {}.", args.path.display());
        return Ok(());
    }
    println!("Analyzing {} submission file(s)...", files.len());

    let detector = SimulatedDetector::new();
    let extractor = SimulatedExtractor::new();
    let project = ProjectMeta {
        name: args.name.clone(),
        project_type,
    };
    let outcome = pipeline::run_analysis(&detector, &extractor, &files, project);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        reporting::print_report(&outcome.report, &outcome.warnings);
    }

    if args.save {
        let store = store::Store::open(&args.store)?;
        let saved = store.save_report(&args.owner, &outcome.report)?;
        println!("\nSaved report {}", saved.id.cyan());
    }

    if outcome.report.classification == Classification::Rejected {
        process::exit(1);
    }
    Ok(())
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    match &args.project_type {
        Some(slug) => {
            let project_type = resolve_project_type(slug);
            println!("{} ({})", "Parameter profile".bold(), project_type.label());
            for category in catalog::parameter_catalog(project_type) {
                println!("\n{}", category.name.bold());
                for p in &category.parameters {
                    let bound = match p.comparison {
                        plancheck_core::types::ComparisonMode::Minimum => "min",
                        plancheck_core::types::ComparisonMode::Maximum => "max",
                    };
                    println!(
                        "  {:<28} {} {}{}",
                        p.name, bound, p.reference_value, p.unit
                    );
                }
            }
        }
        None => {
            println!("{}", "Element checklist".bold());
            for category in catalog::element_catalog() {
                println!("\n{}", category.name.bold());
                for element in &category.elements {
                    let tag = if element.required {
                        "required".red()
                    } else {
                        "optional".dimmed()
                    };
                    println!("  [{tag}] {:<26} {}", element.name, element.description);
                }
            }
        }
    }
    Ok(())
}

fn run_reports(args: &ReportsArgs) -> Result<()> {
    let store = store::Store::open(&args.store)?;
    let reports = store.list_reports(&args.owner)?;
    if reports.is_empty() {
        println!("No saved reports for owner '{}'.", args.owner);
        return Ok(());
    }
    for record in reports {
        println!(
            "{}  {:<30} {:>6.1}%  {}",
            record.id.cyan(),
            record.report.project.name,
            record.report.overall_conformity,
            record.report.classification.label()
        );
    }
    Ok(())
}
