//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Warehouse Compare configuration file.

use crate::cli::{load_cli_config, DEFAULT_CONFIG_PATH};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        // Loading runs validation as its last step
        let config = match load_cli_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Max Photos per Record: {}", config.records.max_photos);
        println!("  Table File: {}", config.export.table_file_name);
        println!("  Report Title: {}", config.export.report_title);
        println!("  Currency: {}", config.export.currency_code);
        println!("  Fallback Report Name: {}", config.export.fallback_file_stem);
        println!("  Output Directory: {}", config.export.output_dir);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_validate_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("warehouse.toml");
        std::fs::write(&path, "[records]\nmax_photos = 10\n").unwrap();

        let code = ValidateArgs {}
            .execute(Some(path.to_str().unwrap()))
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("warehouse.toml");
        std::fs::write(&path, "[export]\ntable_file_name = \"out.xlsx\"\n").unwrap();

        let code = ValidateArgs {}
            .execute(Some(path.to_str().unwrap()))
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
