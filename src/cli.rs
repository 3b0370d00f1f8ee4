// src/cli.rs
//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plancheck")]
#[command(about = "Checks architectural submissions against municipal urban-planning rules")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a directory of submission files and print the conformity report
    Analyze(AnalyzeArgs),
    /// Print the element checklist or a project type's parameter profile
    Catalog(CatalogArgs),
    /// List saved reports for an owner
    Reports(ReportsArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Directory containing the submission drawings
    pub path: PathBuf,

    /// Project name used in the report header
    #[arg(long, default_value = "Unnamed project")]
    pub name: String,

    /// Project type slug (unknown slugs fall back to residential-single-family)
    #[arg(long = "project-type", default_value = "residential-single-family")]
    pub project_type: String,

    /// Print the raw report as JSON instead of the console view
    #[arg(long)]
    pub json: bool,

    /// Persist the report under the store directory
    #[arg(long)]
    pub save: bool,

    /// Storage directory for saved records
    #[arg(long, default_value = ".plancheck")]
    pub store: PathBuf,

    /// Owner id that saved records are scoped to
    #[arg(long, default_value = "local")]
    pub owner: String,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Show the parameter profile for this project type instead of the
    /// element checklist
    #[arg(long = "project-type")]
    pub project_type: Option<String>,
}

#[derive(Args)]
pub struct ReportsArgs {
    /// Storage directory for saved records
    #[arg(long, default_value = ".plancheck")]
    pub store: PathBuf,

    /// Owner id to list reports for
    #[arg(long, default_value = "local")]
    pub owner: String,
}
