//! # socialdash-cli
//!
//! Command-line interface for the socialdash analytics pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use socialdash_core::{build_report_dataset, normalize_table, scan_book, NormalizedTable};
use socialdash_export::{write_report_xlsx, write_table_csv};
use socialdash_model::{build_dashboard_model, load_workbook_data};
use socialdash_sheet::Book;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// socialdash - social media analytics workbook pipeline
#[derive(Parser)]
#[command(name = "socialdash")]
#[command(author, version, about = "Normalize and report on social analytics workbooks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Detect and summarize the tables in a workbook
    Inspect {
        /// Workbook to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit table metadata as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Build the dashboard model and write it as JSON
    Model {
        /// Workbook to load
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Extract the canonical report dataset and write the five-tab workbook
    Publish {
        /// Workbook to load
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Destination report workbook
        #[arg(short, long, value_name = "PATH", default_value = "report.xlsx")]
        output: PathBuf,

        /// Also write one CSV per tab into this directory
        #[arg(long, value_name = "DIR")]
        csv_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    match cli.command {
        Command::Inspect { file, json } => inspect(&file, json),
        Command::Model { file, output } => model(&file, output.as_deref()),
        Command::Publish {
            file,
            output,
            csv_dir,
        } => publish(&file, &output, csv_dir.as_deref()),
    }
}

fn load_book(path: &Path) -> Result<Book> {
    Book::from_xlsx(path).with_context(|| format!("Failed to read workbook: {}", path.display()))
}

fn inspect(file: &Path, json: bool) -> Result<()> {
    let book = load_book(file)?;
    let tables: Vec<NormalizedTable> = scan_book(&book).iter().map(normalize_table).collect();

    if json {
        let metas: Vec<_> = tables.iter().map(|t| &t.meta).collect();
        println!("{}", serde_json::to_string_pretty(&metas)?);
        return Ok(());
    }

    println!(
        "{} {} table(s) in {}",
        "detected".green().bold(),
        tables.len(),
        file.display()
    );
    for table in &tables {
        println!(
            "  {} rows {}-{} of '{}': {} ({:?}, {}) columns: {}",
            table.meta.table_type.cyan(),
            table.meta.table.start_row,
            table.meta.table.end_row,
            table.meta.table.sheet_name,
            table.rows.len(),
            table.meta.platform,
            table.meta.metric_type,
            table.columns.join(", ")
        );
    }

    Ok(())
}

fn model(file: &Path, output: Option<&Path>) -> Result<()> {
    let book = load_book(file)?;
    let model = build_dashboard_model(load_workbook_data(&book));
    let json = serde_json::to_string_pretty(&model)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write model: {}", path.display()))?;
            println!(
                "{} dashboard model ({} sheets, {} sections) to {}",
                "wrote".green().bold(),
                model.sheets.len(),
                model.sections.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn publish(file: &Path, output: &Path, csv_dir: Option<&Path>) -> Result<()> {
    let book = load_book(file)?;
    let dataset = build_report_dataset(&book);

    write_report_xlsx(&dataset, output)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;

    println!("{} report to {}", "wrote".green().bold(), output.display());
    for (metric, table) in dataset.tabs() {
        println!("  {}: {} row(s)", metric.tab_title().cyan(), table.rows.len());
    }

    if let Some(dir) = csv_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        for (metric, table) in dataset.tabs() {
            let path = dir.join(format!("{metric}.csv"));
            write_table_csv(table, &path)
                .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
        }
        println!("{} per-tab CSVs to {}", "wrote".green().bold(), dir.display());
    }

    Ok(())
}
