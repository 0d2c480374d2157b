//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use warehouse_compare::logging::init_logging;
//! use warehouse_compare::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use warehouse_compare::log_export_start;
///
/// log_export_start!(3, "intake.json");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($records:expr, $input:expr) => {
        tracing::info!(
            records = $records,
            input = %$input,
            "Starting export"
        );
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use warehouse_compare::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(3, Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($records:expr, $duration:expr) => {
        tracing::info!(
            records = $records,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use warehouse_compare::log_error_with_context;
/// use warehouse_compare::domain::WarehouseError;
///
/// let error = WarehouseError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
