use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::{CatalogBuilder, echo_catalog, find_untracked_records, serialize, write_catalog};
use crate::models::BuildReport;
use crate::taxonomy::Taxonomy;
use crate::utils::{format_path_with_tilde, get_base_dir, get_output_file};

#[derive(Parser)]
#[command(name = "question-catalog")]
#[command(version = "0.1.0")]
#[command(about = "Compile interview question records into a flat catalog file", long_about = None)]
pub struct Cli {
    /// Directory containing <category>/<id>/question.json records
    #[arg(long, global = true, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Catalog file to write (replaced on every run)
    #[arg(long, global = true, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// JSON file overriding the built-in category/id table
    #[arg(long, global = true, value_name = "FILE")]
    pub taxonomy: Option<PathBuf>,

    /// Don't echo catalog lines to stdout
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show per-category counts without writing the catalog
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let taxonomy = match &cli.taxonomy {
        Some(path) => Taxonomy::load(path)?,
        None => Taxonomy::default(),
    };
    let base_dir = get_base_dir(cli.base_dir.clone());

    match &cli.command {
        Some(Commands::Stats) => {
            show_stats(&base_dir, taxonomy)?;
        }
        None => {
            let out = get_output_file(cli.out.clone());
            compile(&base_dir, &out, taxonomy, cli.quiet)?;
        }
    }

    Ok(())
}

fn compile(base_dir: &Path, out: &Path, taxonomy: Taxonomy, quiet: bool) -> Result<()> {
    let report = CatalogBuilder::new(taxonomy).build(base_dir)?;

    // Report before writing so diagnostics survive a failed write
    print_summary(&report);

    write_catalog(serialize(&report.catalog), out)?;
    eprintln!("Wrote {} entries to {}", report.found(), out.display());

    if !quiet {
        echo_catalog(serialize(&report.catalog), io::stdout().lock())
            .context("Failed to echo catalog to stdout")?;
    }

    Ok(())
}

fn print_summary(report: &BuildReport) {
    eprintln!(
        "Catalog: {} of {} questions found ({} unreadable)",
        report.found(),
        report.expected(),
        report.diagnostics.len()
    );
    for count in &report.counts {
        eprintln!("  {:<16} {:>3}/{:<3}", count.category.name(), count.found, count.expected);
    }
    if !report.diagnostics.is_empty() {
        eprintln!("Unreadable: {}", report.unreadable_identifiers().join(", "));
    }
}

fn show_stats(base_dir: &Path, taxonomy: Taxonomy) -> Result<()> {
    let builder = CatalogBuilder::new(taxonomy);
    let report = builder.build(base_dir)?;
    let untracked = find_untracked_records(base_dir, builder.taxonomy());

    println!("Question Catalog Statistics");
    println!("===========================");
    println!("Base directory: {}", format_path_with_tilde(base_dir));
    println!();
    println!("{:<16} {:>6} {:>9} {:>11} {:>7}", "Category", "Found", "Expected", "Unreadable", "Detail");
    for count in &report.counts {
        println!(
            "{:<16} {:>6} {:>9} {:>11} {:>7}",
            count.category.name(),
            count.found,
            count.expected,
            count.unreadable,
            count.with_detail
        );
    }
    println!();
    println!("Total: {} of {} questions found", report.found(), report.expected());

    if !report.diagnostics.is_empty() {
        println!("Unreadable records:");
        for diagnostic in &report.diagnostics {
            println!("  {}: {}", diagnostic.identifier, diagnostic.error);
        }
    }

    if !untracked.is_empty() {
        println!("Untracked records: {}", untracked.len());
        for path in &untracked {
            println!("  {}", format_path_with_tilde(path));
        }
    }

    Ok(())
}
