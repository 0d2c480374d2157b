//! Atomic artifact writes

use crate::domain::{Result, WarehouseError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write `bytes` to `dir/file_name` so readers never see a partial file
///
/// The content goes to a temporary file in the same directory first and is
/// renamed into place only after it has been fully written and synced.
///
/// # Errors
///
/// Returns [`WarehouseError::Export`] if the directory cannot be created or
/// any write fails. No file is left at the destination in that case.
pub fn persist_atomically(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        WarehouseError::Export(format!(
            "Failed to create output directory {}: {e}",
            dir.display()
        ))
    })?;

    let destination = dir.join(file_name);
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(&destination).map_err(|e| {
        WarehouseError::Export(format!(
            "Failed to move report into {}: {}",
            destination.display(),
            e.error
        ))
    })?;

    tracing::debug!(path = %destination.display(), bytes = bytes.len(), "Artifact written");
    Ok(destination)
}
