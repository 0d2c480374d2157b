//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Warehouse Compare configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: warehouse-compare validate-config");
                println!("  3. Create an intake file: warehouse-compare template --records 3");
                println!("  4. Run export: warehouse-compare export --input intake.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> &'static str {
        r#"# Warehouse Compare Configuration File
# Every setting is optional; the values below are the defaults.
# Any key can be overridden with WAREHOUSE_<SECTION>_<KEY>, e.g.
# WAREHOUSE_RECORDS_MAX_PHOTOS=10

[application]
log_level = "info"  # trace | debug | info | warn | error

[records]
# Photos attached beyond this limit are dropped (1-50)
max_photos = 15

[export]
table_file_name = "warehouse-comparison.csv"
report_title = "Warehouse Comparison Report"
currency_code = "THB"
# Report file name when the first record has no name, location, area or rate
fallback_file_stem = "warehouse-comparison-report"
# ${VAR} placeholders are replaced from the environment
output_dir = "."

[logging]
local_enabled = false
local_path = "/var/log/warehouse-compare"
local_rotation = "daily"  # daily | hourly | never
"#
    }
}
