//! Export command implementation
//!
//! This module implements the `export` command: it replays an intake file
//! through a fresh record store and writes the comparison table and/or the
//! visual report.

use crate::adapters::intake::{load_intake, replay_intake, IntakeProblem, IntakeProblemKind};
use crate::cli::load_cli_config;
use crate::config::WarehouseConfig;
use crate::core::export::{
    export_table, persist_atomically, ExportError, ExportErrorType, ExportSummary, HtmlRenderer,
    JsonRenderer, ReportRenderer, VisualExporter,
};
use crate::core::store::{RecordSnapshot, RecordStore};
use crate::domain::WarehouseError;
use crate::{log_error_with_context, log_export_complete, log_export_start};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Output format of the visual report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Self-contained HTML page
    #[default]
    Html,
    /// Report document as JSON
    Json,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Intake file (JSON array of records)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the CSV comparison table
    #[arg(long)]
    pub table: bool,

    /// Write the visual report
    #[arg(long)]
    pub report: bool,

    /// Visual report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,

    /// Override the output directory from the configuration
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Whether the table should be written; both artifacts when neither flag is set
    fn wants_table(&self) -> bool {
        self.table || !self.report
    }

    fn wants_report(&self) -> bool {
        self.report || !self.table
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting export command");
        let start = Instant::now();

        let config = match load_cli_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };

        let entries = match load_intake(&self.input) {
            Ok(entries) => entries,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load intake file");
                eprintln!("{e}");
                return Ok(2);
            }
        };
        log_export_start!(entries.len(), self.input.display());

        let mut store = RecordStore::new(config.records.max_photos);
        let base_dir = self.input.parent().unwrap_or_else(|| Path::new("."));
        let intake = replay_intake(&mut store, &entries, base_dir);

        let mut summary = ExportSummary::new();
        summary.total_records = intake.records;
        summary.fields_applied = intake.fields_applied;
        summary.invalid_values = intake.invalid_values;
        summary.photos_attached = intake.photos_attached;
        summary.photos_dropped = intake.photos_dropped;
        for problem in &intake.problems {
            summary.add_error(intake_error(problem));
        }

        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
        let snapshot = store.snapshot();

        if self.wants_table() {
            match write_table(snapshot.clone(), &output_dir, &config.export.table_file_name).await {
                Ok(path) => summary.table_path = Some(path),
                Err(e) => {
                    log_error_with_context!(&e, "Failed to write table");
                    summary.add_error(ExportError::new(ExportErrorType::Table, e.to_string()));
                }
            }
        }

        if self.wants_report() {
            let result = match self.format {
                ReportFormat::Html => write_report(HtmlRenderer, &config, &output_dir, snapshot).await,
                ReportFormat::Json => write_report(JsonRenderer, &config, &output_dir, snapshot).await,
            };
            match result {
                Ok(path) => summary.report_path = Some(path),
                Err(e) => {
                    log_error_with_context!(&e, "Failed to write report");
                    summary.add_error(
                        ExportError::new(ExportErrorType::Report, e.to_string())
                            .with_context(format!("format={:?}", self.format)),
                    );
                }
            }
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        log_export_complete!(summary.total_records, summary.duration);
        print_summary(&summary);

        let exit_code = if !summary.is_successful() {
            println!("❌ Export failed");
            5
        } else if summary.has_warnings() {
            println!("⚠️  Export completed with warnings");
            1
        } else {
            println!("✅ Export completed successfully!");
            0
        };

        Ok(exit_code)
    }
}

fn intake_error(problem: &IntakeProblem) -> ExportError {
    let error_type = match problem.kind {
        IntakeProblemKind::Field => ExportErrorType::Intake,
        IntakeProblemKind::Photo => ExportErrorType::Photo,
    };
    ExportError::new(error_type, problem.message.clone())
        .with_context(format!("record #{}", problem.position))
}

async fn write_table(
    snapshot: RecordSnapshot,
    output_dir: &Path,
    file_name: &str,
) -> crate::domain::Result<PathBuf> {
    let dir = output_dir.to_path_buf();
    let file_name = file_name.to_string();
    tokio::task::spawn_blocking(move || {
        let bytes = export_table(snapshot.records())?.to_csv_bytes()?;
        persist_atomically(&dir, &file_name, &bytes)
    })
    .await
    .map_err(|e| WarehouseError::Export(format!("Table writer task failed: {e}")))?
}

async fn write_report<R: ReportRenderer>(
    renderer: R,
    config: &WarehouseConfig,
    output_dir: &Path,
    snapshot: RecordSnapshot,
) -> crate::domain::Result<PathBuf> {
    VisualExporter::new(renderer, output_dir)
        .with_options(config.export.report_options())
        .with_fallback_stem(config.export.fallback_file_stem.clone())
        .export(snapshot)
        .await
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Records: {}", summary.total_records);
    println!("  Fields Applied: {}", summary.fields_applied);
    println!("  Invalid Values: {}", summary.invalid_values);
    println!("  Photos Attached: {}", summary.photos_attached);
    if summary.photos_dropped > 0 {
        println!("  Photos Dropped: {}", summary.photos_dropped);
    }
    if let Some(path) = &summary.table_path {
        println!("  Table: {}", path.display());
    }
    if let Some(path) = &summary.report_path {
        println!("  Report: {}", path.display());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.errors.is_empty() {
        println!("⚠️  Problems encountered:");
        for error in &summary.errors {
            println!("  - {:?}: {}", error.error_type, error.message);
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
    }
}
