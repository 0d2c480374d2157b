//! Configuration management for Warehouse Compare.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Warehouse Compare uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `WAREHOUSE_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use warehouse_compare::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("warehouse.toml")?;
//!
//! println!("Max photos: {}", config.records.max_photos);
//! println!("Table file: {}", config.export.table_file_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`RecordsConfig`] - Record store settings (photo limit)
//! - [`ExportConfig`] - Export settings (file names, report title, currency)
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [records]
//! max_photos = 15
//!
//! [export]
//! table_file_name = "warehouse-comparison.csv"
//! report_title = "Warehouse Comparison Report"
//! currency_code = "THB"
//! output_dir = "${HOME}/exports"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, ExportConfig, LoggingConfig, RecordsConfig, WarehouseConfig};
