// SPDX-License-Identifier: PMPL-1.0-or-later

//! scan-triage: unified triage of heterogeneous static-analysis findings
//!
//! Aggregates stored result sets from a pattern scanner, a dependency
//! scanner, and a C/C++ linter into one filterable, sortable report, with
//! JSON/YAML/CSV/SARIF export and timestamped report storage.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scan_triage::aggregate::{
    build_unified, compute_stats, SeverityFilter, SortKey, SortOrder, ToolFilter, ViewOptions,
};
use scan_triage::backend::FixtureBackend;
use scan_triage::report::{self, sarif, ReportOutputFormat};
use scan_triage::session::AnalysisSession;
use scan_triage::storage;
use scan_triage::types::AnalysisResultSet;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scan-triage")]
#[command(version)]
#[command(about = "Unified triage of pattern-scan, dependency-audit, and lint findings")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the combined report for a stored result set
    Report {
        /// Result-set JSON document
        #[arg(value_name = "RESULTS")]
        results: PathBuf,

        /// Restrict to one tool (pattern-scan, dependency-scan, lint)
        #[arg(long, default_value = "all")]
        tool: String,

        /// Restrict to one severity bucket (critical, high, medium, low)
        #[arg(long, default_value = "all")]
        severity: String,

        /// Sort column (severity, tool, file, line, rule)
        #[arg(long, default_value = "severity")]
        sort: String,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "desc")]
        order: String,

        /// Save the combined report JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print summary counts for a stored result set
    Stats {
        /// Result-set JSON document
        #[arg(value_name = "RESULTS")]
        results: PathBuf,
    },

    /// Export the filtered unified sequence
    Export {
        /// Result-set JSON document
        #[arg(value_name = "RESULTS")]
        results: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormatArg,

        /// Restrict to one tool
        #[arg(long, default_value = "all")]
        tool: String,

        /// Restrict to one severity bucket
        #[arg(long, default_value = "all")]
        severity: String,

        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run analysis through a file-backed backend and report the outcome
    Run {
        /// Result-set JSON document standing in for the analysis service
        #[arg(long, value_name = "RESULTS")]
        fixture: PathBuf,

        /// Files submitted for analysis
        #[arg(long, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Persist the combined report after the run
        #[arg(long)]
        store: bool,

        /// Storage formats when --store is given
        #[arg(long, value_enum, value_delimiter = ',', default_value = "json")]
        formats: Vec<ReportOutputFormat>,

        /// Report directory
        #[arg(long, default_value = "reports")]
        report_dir: PathBuf,
    },

    /// List the most recently stored reports
    History {
        /// Report directory
        #[arg(long, default_value = "reports")]
        report_dir: PathBuf,

        /// How many reports to list
        #[arg(long, default_value = "5")]
        count: usize,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ExportFormatArg {
    Json,
    Yaml,
    Csv,
    Sarif,
}

fn load_result_set(path: &PathBuf) -> Result<AnalysisResultSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading result set {}", path.display()))?;
    let set = serde_json::from_str(&content)
        .with_context(|| format!("parsing result set {}", path.display()))?;
    Ok(set)
}

fn view_options(tool: &str, severity: &str, sort: &str, order: &str) -> ViewOptions {
    ViewOptions {
        tool: ToolFilter::parse(tool),
        severity: SeverityFilter::parse(severity),
        sort_key: SortKey::parse(sort),
        sort_order: SortOrder::parse(order),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            results,
            tool,
            severity,
            sort,
            order,
            output,
        } => {
            let set = load_result_set(&results)?;
            let unified = build_unified(&set);
            let view = view_options(&tool, &severity, &sort, &order);
            let combined = report::build_report(&unified, &view);

            report::print_report(&combined);

            if let Some(output_path) = output {
                report::save_report(&combined, output_path)?;
            }
        }

        Commands::Stats { results } => {
            let set = load_result_set(&results)?;
            let unified = build_unified(&set);
            let stats = compute_stats(&unified);

            println!("Total issues: {}", stats.total);
            println!(
                "  Critical: {}  High: {}  Medium: {}  Low: {}",
                stats.by_severity.critical,
                stats.by_severity.high,
                stats.by_severity.medium,
                stats.by_severity.low
            );
            println!(
                "  Pattern scan: {}  Dependency scan: {}  Lint: {}",
                stats.by_tool.pattern_scan, stats.by_tool.dependency_scan, stats.by_tool.lint
            );
        }

        Commands::Export {
            results,
            format,
            tool,
            severity,
            output,
        } => {
            let set = load_result_set(&results)?;
            let unified = build_unified(&set);
            let view = view_options(&tool, &severity, "severity", "desc");

            let combined = report::build_report(&unified, &view);

            let content = match format {
                ExportFormatArg::Sarif => sarif::to_sarif_json(&combined.issues)?,
                ExportFormatArg::Json => ReportOutputFormat::Json.serialize(&combined)?,
                ExportFormatArg::Yaml => ReportOutputFormat::Yaml.serialize(&combined)?,
                ExportFormatArg::Csv => ReportOutputFormat::Csv.serialize(&combined)?,
            };

            match output {
                Some(path) => {
                    fs::write(&path, content)
                        .with_context(|| format!("writing export {}", path.display()))?;
                    println!("Export saved to: {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Run {
            fixture,
            files,
            store,
            formats,
            report_dir,
        } => {
            let mut session = AnalysisSession::new();
            session.set_selected_files(files);

            let backend = FixtureBackend::new(&fixture);
            println!("Running analysis...");
            session.run_analysis(&backend)?;

            let unified = build_unified(session.result_set());
            let combined = report::build_report(&unified, &ViewOptions::default());
            report::print_report(&combined);

            if store {
                let stored = storage::persist_report(&combined, Some(&report_dir), &formats)?;
                for path in stored {
                    println!("Report saved to: {}", path.display());
                }
            }
        }

        Commands::History { report_dir, count } => {
            let reports = storage::latest_reports(&report_dir, count)?;
            for path in reports {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
