//! Report rendering and the visual export pipeline
//!
//! A [`ReportRenderer`] turns a [`ReportDocument`] into bytes. The
//! [`VisualExporter`] ties the pieces together: it builds the document from
//! a [`RecordSnapshot`], awaits the renderer and then persists the result
//! atomically, so a failed render never leaves a partial file behind.

use super::filename::{suggested_file_stem, DEFAULT_FILE_STEM};
use super::output::persist_atomically;
use super::report::{export_visual, ReportDocument, ReportOptions};
use crate::core::store::RecordSnapshot;
use crate::domain::{Result, WarehouseError};
use async_trait::async_trait;
use chrono::Local;
use minijinja::Environment;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Turns a report document into a file body
#[async_trait]
pub trait ReportRenderer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// File extension of the rendered artifact, without the dot
    fn extension(&self) -> &'static str;

    /// Render the document
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Render`] if the document cannot be rendered.
    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>>;
}

/// Self-contained HTML page with inline styles
///
/// The page layout lives in `templates/report.html`; values are escaped by
/// the template engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

#[async_trait]
impl ReportRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn extension(&self) -> &'static str {
        "html"
    }

    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        Ok(render_html(document)?.into_bytes())
    }
}

fn render_html(document: &ReportDocument) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)
        .map_err(template_error)?;
    let template = env.get_template(REPORT_TEMPLATE_NAME).map_err(template_error)?;
    template.render(document).map_err(template_error)
}

fn template_error(e: minijinja::Error) -> WarehouseError {
    WarehouseError::Render(format!("Failed to render report template: {e}"))
}

/// Pretty-printed JSON, for feeding the report into other tools
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[async_trait]
impl ReportRenderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(document)
            .map_err(|e| WarehouseError::Render(format!("Failed to encode report: {e}")))
    }
}

/// Builds, renders and writes the visual report
pub struct VisualExporter<R> {
    renderer: R,
    options: ReportOptions,
    output_dir: PathBuf,
    fallback_stem: String,
}

impl<R: ReportRenderer> VisualExporter<R> {
    /// Create an exporter writing into `output_dir`
    pub fn new(renderer: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            options: ReportOptions::default(),
            output_dir: output_dir.into(),
            fallback_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    /// Override the report title and currency
    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }

    /// Override the file stem used when the first record has no usable name
    pub fn with_fallback_stem(mut self, stem: impl Into<String>) -> Self {
        self.fallback_stem = stem.into();
        self
    }

    /// Directory the report is written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render a snapshot and write it, returning the path of the new file
    ///
    /// The snapshot is owned by the call, so edits made to the store while
    /// the render is in flight are not reflected in the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot is malformed, rendering fails or the
    /// file cannot be written. Nothing is written at the destination then.
    pub async fn export(&self, snapshot: RecordSnapshot) -> Result<PathBuf> {
        let start = Instant::now();
        let generated_at = snapshot.taken_at().with_timezone(&Local).naive_local();
        let document = export_visual(snapshot.records(), generated_at, &self.options)?;

        let bytes = self.renderer.render(&document).await?;

        let file_name = format!(
            "{}.{}",
            suggested_file_stem(snapshot.first(), &self.fallback_stem),
            self.renderer.extension()
        );
        let dir = self.output_dir.clone();
        let size = bytes.len();
        let path = tokio::task::spawn_blocking(move || persist_atomically(&dir, &file_name, &bytes))
            .await
            .map_err(|e| WarehouseError::Export(format!("Report writer task failed: {e}")))??;

        tracing::info!(
            renderer = self.renderer.name(),
            records = snapshot.len(),
            bytes = size,
            path = %path.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Visual report written"
        );

        Ok(path)
    }
}
