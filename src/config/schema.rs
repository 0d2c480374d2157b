//! Configuration schema types
//!
//! This module defines the configuration structure for Warehouse Compare.
//! Every section is optional in the TOML file and falls back to defaults.

use crate::core::export::report::{ReportOptions, DEFAULT_CURRENCY_CODE, DEFAULT_REPORT_TITLE};
use crate::core::export::{DEFAULT_FILE_STEM, DEFAULT_TABLE_FILE_NAME};
use crate::core::store::DEFAULT_MAX_PHOTOS;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `records.max_photos`
pub const MAX_PHOTOS_LIMIT: usize = 50;

/// Main Warehouse Compare configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Record store settings
    #[serde(default)]
    pub records: RecordsConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WarehouseConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.records.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Record store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Maximum number of photos per record
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_photos: default_max_photos(),
        }
    }
}

impl RecordsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_photos == 0 || self.max_photos > MAX_PHOTOS_LIMIT {
            return Err(format!(
                "records.max_photos must be between 1 and {MAX_PHOTOS_LIMIT}, got {}",
                self.max_photos
            ));
        }
        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// File name of the CSV table
    #[serde(default = "default_table_file_name")]
    pub table_file_name: String,

    /// Heading of the visual report
    #[serde(default = "default_report_title")]
    pub report_title: String,

    /// Currency code shown next to the total price
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Report file stem used when the first record has no usable name
    #[serde(default = "default_fallback_file_stem")]
    pub fallback_file_stem: String,

    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            table_file_name: default_table_file_name(),
            report_title: default_report_title(),
            currency_code: default_currency_code(),
            fallback_file_stem: default_fallback_file_stem(),
            output_dir: default_output_dir(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        let name = self.table_file_name.trim();
        if name.is_empty() || !name.to_ascii_lowercase().ends_with(".csv") {
            return Err(format!(
                "export.table_file_name must end with .csv, got '{}'",
                self.table_file_name
            ));
        }
        if name.contains(['/', '\\']) {
            return Err("export.table_file_name must be a file name, not a path".to_string());
        }
        if self.report_title.trim().is_empty() {
            return Err("export.report_title cannot be empty".to_string());
        }
        let code = self.currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!(
                "export.currency_code must be a three-letter code such as THB, got '{}'",
                self.currency_code
            ));
        }
        if crate::core::export::filename::slugify(&self.fallback_file_stem) != self.fallback_file_stem {
            return Err(format!(
                "export.fallback_file_stem must be lowercase words joined by hyphens, got '{}'",
                self.fallback_file_stem
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }

    /// Report presentation settings derived from this section
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report_title.clone(),
            currency_code: self.currency_code.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_photos() -> usize {
    DEFAULT_MAX_PHOTOS
}

fn default_table_file_name() -> String {
    DEFAULT_TABLE_FILE_NAME.to_string()
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

fn default_fallback_file_stem() -> String {
    DEFAULT_FILE_STEM.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_local_path() -> String {
    "/var/log/warehouse-compare".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WarehouseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.records.max_photos, 15);
        assert_eq!(config.export.table_file_name, "warehouse-comparison.csv");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: WarehouseConfig = toml::from_str("").unwrap();
        assert_eq!(config, WarehouseConfig::default());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = WarehouseConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_max_photos_bounds() {
        let mut config = WarehouseConfig::default();
        config.records.max_photos = 0;
        assert!(config.validate().is_err());
        config.records.max_photos = 51;
        assert!(config.validate().is_err());
        config.records.max_photos = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_table_file_name_must_be_csv() {
        let mut config = WarehouseConfig::default();
        config.export.table_file_name = "comparison.xlsx".to_string();
        assert!(config.validate().is_err());
        config.export.table_file_name = "out/comparison.csv".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_currency_code() {
        let mut config = WarehouseConfig::default();
        config.export.currency_code = "baht".to_string();
        assert!(config.validate().is_err());
        config.export.currency_code = "USD".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fallback_stem_must_be_slug() {
        let mut config = WarehouseConfig::default();
        config.export.fallback_file_stem = "My Report".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = WarehouseConfig::default();
        config.logging.local_rotation = "size".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_report_options() {
        let mut config = WarehouseConfig::default();
        config.export.currency_code = "USD".to_string();
        let options = config.export.report_options();
        assert_eq!(options.title, "Warehouse Comparison Report");
        assert_eq!(options.currency_code, "USD");
    }
}
