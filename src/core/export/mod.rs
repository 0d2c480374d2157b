//! Export of the record collection
//!
//! This module turns records into external artifacts:
//! - A fixed-header comparison table written as CSV
//! - A sparse visual report rendered through a [`ReportRenderer`]
//! - Suggested file names and atomic file writes
//! - Summary and reporting
//!
//! Exporters only ever read records; the store is never modified.

pub mod columns;
pub mod filename;
pub mod format;
pub mod output;
pub mod render;
pub mod report;
pub mod summary;
pub mod table;
pub mod validate;

pub use columns::{Column, Topic, COLUMNS};
pub use filename::{suggested_file_stem, DEFAULT_FILE_STEM};
pub use output::persist_atomically;
pub use render::{HtmlRenderer, JsonRenderer, ReportRenderer, VisualExporter};
pub use report::{export_visual, ReportDocument, ReportOptions};
pub use summary::{ExportError, ExportErrorType, ExportSummary};
pub use table::{export_table, Table, DEFAULT_TABLE_FILE_NAME};
pub use validate::validate_records;
