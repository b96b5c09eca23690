//! Strategy Report Converter
//!
//! Turns strategy backtest report workbooks (.xlsx exports with Performance,
//! Trades analysis, Risk performance ratios, List of trades and Properties
//! sheets) into one JSON document per workbook.

mod batch;
mod config;
mod errors;
mod export;
mod extract;
mod inspect;
mod models;
mod workbook;

#[cfg(test)]
mod fixtures;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{ConverterConfig, DATA_DIR_ENV};
use crate::workbook::Workbook;

/// Strategy report workbook to JSON converter CLI.
#[derive(Parser)]
#[command(name = "tvreport")]
#[command(about = "Convert strategy backtest report workbooks to JSON", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TVREPORT_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every workbook in the data directory (default command)
    Convert {
        /// Input directory (defaults to ./data, then ../data)
        #[arg(env = "TVREPORT_DATA_DIR")]
        dir: Option<PathBuf>,

        /// Convert a single workbook instead of a directory (takes precedence over DIR)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show a sample of a converted report JSON
    Inspect {
        /// Report JSON (defaults to the first .json in the data directory)
        path: Option<PathBuf>,
    },

    /// Show the sheets, headers and first rows of a workbook
    Sheets {
        /// Workbook (defaults to the first spreadsheet in the data directory)
        path: Option<PathBuf>,

        /// Number of data rows to preview per sheet
        #[arg(short, long, default_value = "5")]
        rows: usize,
    },

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ConverterConfig::default();
    let command = cli.command.unwrap_or_else(|| Commands::Convert {
        dir: std::env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        file: None,
    });

    match command {
        Commands::Convert { file: Some(file), .. } => {
            let output = batch::convert_file(&file)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            println!("Saved JSON to {}", output.display());
        }

        Commands::Convert { dir, file: None } => {
            let data_dir = config.resolve_data_dir(dir.as_deref());
            let summary = batch::convert_directory(&data_dir, &config)?;

            if summary.found() == 0 {
                println!("No spreadsheet files found in {}", data_dir.display());
                return Ok(());
            }
            println!("{}", summary);
            if !summary.is_clean() {
                warn!(failed = summary.failures.len(), "Some workbooks were not converted");
            }
        }

        Commands::Inspect { path } => {
            let path = match path {
                Some(p) => p,
                None => {
                    let data_dir = config.resolve_data_dir(None);
                    let is_json = |p: &std::path::Path| {
                        p.extension().map(|e| e.eq_ignore_ascii_case("json")).unwrap_or(false)
                    };
                    match inspect::first_file(&data_dir, is_json)? {
                        Some(p) => p,
                        None => {
                            println!("No JSON files found in {}", data_dir.display());
                            return Ok(());
                        }
                    }
                }
            };

            info!(file = %path.display(), "Checking report");
            let doc = export::read_report_json(&path)?;
            inspect::write_report_sample(&mut std::io::stdout().lock(), &doc)?;
        }

        Commands::Sheets { path, rows } => {
            let path = match path {
                Some(p) => p,
                None => {
                    let data_dir = config.resolve_data_dir(None);
                    match inspect::first_file(&data_dir, |p| config.is_spreadsheet(p))? {
                        Some(p) => p,
                        None => {
                            println!("No spreadsheet files found in {}", data_dir.display());
                            return Ok(());
                        }
                    }
                }
            };

            info!(file = %path.display(), "Analyzing workbook");
            let workbook = Workbook::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            inspect::write_workbook_overview(&mut std::io::stdout().lock(), &workbook, rows)?;
        }

        Commands::Config => {
            println!("\n=== Converter Configuration ===\n");
            println!("  Data Directory:       {}", config.data_dir.display());
            println!("  Fallback Directory:   {}", config.fallback_data_dir.display());
            println!("  Resolved Directory:   {}", config.resolve_data_dir(None).display());
            println!("  Extension:            .{}", config.extension);
            println!("  Override Variable:    {}", DATA_DIR_ENV);
        }
    }

    Ok(())
}
