//! Intake file loading and replay

use super::models::{raw_value, IntakeEntry, IntakePhoto};
use crate::core::store::RecordStore;
use crate::domain::ids::RecordId;
use crate::domain::record::Photo;
use crate::domain::{Result, WarehouseError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// What an intake problem concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeProblemKind {
    /// A field value was rejected or failed validation
    Field,
    /// A photo could not be loaded or did not fit
    Photo,
}

/// A non-fatal problem found while replaying an intake file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeProblem {
    pub kind: IntakeProblemKind,
    /// One-based position of the entry
    pub position: usize,
    pub message: String,
}

impl IntakeProblem {
    fn field(position: usize, message: impl Into<String>) -> Self {
        Self {
            kind: IntakeProblemKind::Field,
            position,
            message: message.into(),
        }
    }

    fn photo(position: usize, message: impl Into<String>) -> Self {
        Self {
            kind: IntakeProblemKind::Photo,
            position,
            message: message.into(),
        }
    }
}

/// Counters collected while replaying an intake file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReport {
    pub records: usize,
    pub fields_applied: usize,
    pub invalid_values: usize,
    pub photos_attached: usize,
    pub photos_dropped: usize,
    pub problems: Vec<IntakeProblem>,
}

/// Load intake entries from a JSON file
///
/// # Errors
///
/// Returns [`WarehouseError::Intake`] if the file cannot be read, is not a
/// JSON array of entries, or is empty.
pub fn load_intake<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeEntry>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        WarehouseError::Intake(format!("Failed to read {}: {e}", path.display()))
    })?;

    let entries: Vec<IntakeEntry> = serde_json::from_str(&content).map_err(|e| {
        WarehouseError::Intake(format!("Failed to parse {}: {e}", path.display()))
    })?;

    if entries.is_empty() {
        return Err(WarehouseError::Intake(format!(
            "{} contains no records",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), records = entries.len(), "Intake file loaded");
    Ok(entries)
}

/// Replay intake entries through a store
///
/// The first entry fills the store's initial record; every further entry
/// creates a new one. Field and photo problems are collected in the report
/// rather than aborting the replay, matching how the form keeps accepting
/// input after a bad value.
///
/// # Arguments
///
/// * `store` - Store to populate
/// * `entries` - Parsed intake entries
/// * `base_dir` - Directory photo paths are resolved against
pub fn replay_intake(store: &mut RecordStore, entries: &[IntakeEntry], base_dir: &Path) -> IntakeReport {
    let mut report = IntakeReport::default();

    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        let id = if index == 0 {
            store.records()[0].id()
        } else {
            store.create_record().id()
        };

        for (name, value) in &entry.fields {
            match store.update_field_raw(id, name, &raw_value(value)) {
                Ok(outcome) => {
                    report.fields_applied += 1;
                    if outcome.invalid {
                        report.invalid_values += 1;
                        report.problems.push(IntakeProblem::field(
                            position,
                            format!("'{name}' must be a number greater than 0"),
                        ));
                    }
                }
                Err(e) => report.problems.push(IntakeProblem::field(position, e.to_string())),
            }
        }

        attach_entry_photos(store, id, position, &entry.photos, base_dir, &mut report);
    }

    report.records = store.len();
    tracing::info!(
        records = report.records,
        fields_applied = report.fields_applied,
        invalid_values = report.invalid_values,
        photos_attached = report.photos_attached,
        photos_dropped = report.photos_dropped,
        problems = report.problems.len(),
        "Intake replayed"
    );
    report
}

fn attach_entry_photos(
    store: &mut RecordStore,
    id: RecordId,
    position: usize,
    photos: &[IntakePhoto],
    base_dir: &Path,
    report: &mut IntakeReport,
) {
    if photos.is_empty() {
        return;
    }

    let mut loaded = Vec::with_capacity(photos.len());
    for photo in photos {
        match load_photo(photo, base_dir) {
            Ok(p) => loaded.push(p),
            Err(e) => report.problems.push(IntakeProblem::photo(position, e.to_string())),
        }
    }

    match store.attach_photos(id, loaded) {
        Ok(outcome) => {
            report.photos_attached += outcome.accepted;
            report.photos_dropped += outcome.dropped;
            if outcome.dropped > 0 {
                report.problems.push(IntakeProblem::photo(
                    position,
                    format!(
                        "{} photo(s) dropped, a record holds at most {}",
                        outcome.dropped,
                        store.max_photos()
                    ),
                ));
            }
        }
        Err(e) => report.problems.push(IntakeProblem::photo(position, e.to_string())),
    }
}

/// Resolve an intake photo into a [`Photo`], embedding local files as data URLs
///
/// # Errors
///
/// Returns [`WarehouseError::Intake`] if neither or both of `path` and `url`
/// are set, or the file cannot be read.
pub fn load_photo(photo: &IntakePhoto, base_dir: &Path) -> Result<Photo> {
    let image = match (&photo.path, &photo.url) {
        (Some(path), None) => {
            let full_path = base_dir.join(path);
            let bytes = std::fs::read(&full_path).map_err(|e| {
                WarehouseError::Intake(format!(
                    "Failed to read photo {}: {e}",
                    full_path.display()
                ))
            })?;
            format!("data:{};base64,{}", mime_type(path), STANDARD.encode(bytes))
        }
        (None, Some(url)) if !url.trim().is_empty() => url.trim().to_string(),
        _ => {
            return Err(WarehouseError::Intake(
                "A photo needs exactly one of 'path' or 'url'".to_string(),
            ))
        }
    };

    let mut resolved = Photo::new(image);
    if let Some(caption) = &photo.caption {
        resolved = resolved.with_caption(caption.clone());
    }
    Ok(resolved)
}

fn mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}
