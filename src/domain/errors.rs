//! Domain error types
//!
//! This module defines the error hierarchy for Warehouse Compare.
//! All errors are recoverable values; none of them is fatal to a session.

use super::ids::RecordId;
use thiserror::Error;

/// Main Warehouse Compare error type
///
/// This is the primary error type used throughout the library. Variants carry
/// a human-readable message so they can be surfaced to the user directly.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No record with the given ID exists in the collection
    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    /// Removing the record would leave the collection empty
    #[error("Cannot remove record {0}: at least one record must remain")]
    LastRecord(RecordId),

    /// Field name is not part of the record model
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field is derived and cannot be set directly
    #[error("Field '{0}' is derived and cannot be set directly")]
    DerivedField(String),

    /// Value does not belong to the option set of a categorical field
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },

    /// Photo index out of range for a record
    #[error("Photo {index} not found on record {record}")]
    PhotoNotFound { record: RecordId, index: usize },

    /// Record handed to an exporter is absent or corrupt
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Report rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Intake file errors
    #[error("Intake error: {0}")]
    Intake(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for WarehouseError {
    fn from(err: std::io::Error) -> Self {
        WarehouseError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for WarehouseError {
    fn from(err: serde_json::Error) -> Self {
        WarehouseError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for WarehouseError {
    fn from(err: toml::de::Error) -> Self {
        WarehouseError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for WarehouseError {
    fn from(err: csv::Error) -> Self {
        WarehouseError::Export(format!("CSV write failed: {err}"))
    }
}
