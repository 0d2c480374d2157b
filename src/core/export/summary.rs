//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! one `export` run: how the intake replay went and which artifacts were
//! written.

use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of records in the exported collection
    pub total_records: usize,

    /// Field updates applied from the intake
    pub fields_applied: usize,

    /// Numeric values stored but flagged as invalid
    pub invalid_values: usize,

    /// Photos attached
    pub photos_attached: usize,

    /// Photos dropped because a record was full
    pub photos_dropped: usize,

    /// Path of the tabular artifact, if written
    pub table_path: Option<PathBuf>,

    /// Path of the visual report, if written
    pub report_path: Option<PathBuf>,

    /// Duration of the export
    pub duration: Duration,

    /// Problems encountered along the way
    pub errors: Vec<ExportError>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_records: 0,
            fields_applied: 0,
            invalid_values: 0,
            photos_attached: 0,
            photos_dropped: 0,
            table_path: None,
            report_path: None,
            duration: Duration::from_secs(0),
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: ExportError) {
        self.errors.push(error);
    }

    /// Whether anything needs the user's attention
    pub fn has_warnings(&self) -> bool {
        self.invalid_values > 0 || self.photos_dropped > 0 || !self.errors.is_empty()
    }

    /// Check if every requested artifact was written
    pub fn is_successful(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| matches!(e.error_type, ExportErrorType::Table | ExportErrorType::Report))
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_records = self.total_records,
            fields_applied = self.fields_applied,
            invalid_values = self.invalid_values,
            photos_attached = self.photos_attached,
            photos_dropped = self.photos_dropped,
            table = ?self.table_path,
            report = ?self.report_path,
            duration_ms = self.duration.as_millis() as u64,
            "Export summary"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Export completed with errors"
            );
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    context = ?error.context,
                    "Export error"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Type of export error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportErrorType {
    /// Intake entry could not be applied
    Intake,
    /// Photo could not be loaded
    Photo,
    /// Writing the table failed
    Table,
    /// Rendering or writing the report failed
    Report,
}

/// Export error with context
#[derive(Debug, Clone)]
pub struct ExportError {
    /// Type of error
    pub error_type: ExportErrorType,

    /// Error message
    pub message: String,

    /// Optional context (e.g., record position, field name)
    pub context: Option<String>,
}

impl ExportError {
    /// Create a new export error
    pub fn new(error_type: ExportErrorType, message: String) -> Self {
        Self {
            error_type,
            message,
            context: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }
}
