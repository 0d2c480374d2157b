//! Template command implementation
//!
//! This module implements the `template` command, which writes an intake
//! file with blank entries listing every field name.

use crate::adapters::intake::IntakeEntry;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the template command
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Path of the intake file to create
    #[arg(short, long, default_value = "intake.json")]
    pub output: String,

    /// Number of blank records
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(usize))]
    pub records: usize,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl TemplateArgs {
    /// Execute the template command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, records = self.records, "Writing intake template");

        if self.records == 0 {
            println!("❌ --records must be at least 1");
            return Ok(2);
        }

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Intake file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let entries = vec![IntakeEntry::blank_template(); self.records];
        let json = serde_json::to_string_pretty(&entries)?;

        match fs::write(&self.output, json) {
            Ok(_) => {
                println!("✅ Intake template created: {}", self.output);
                println!("   Fill in the fields, add photos as {{\"path\": ...}} or {{\"url\": ...}},");
                println!("   then run: warehouse-compare export --input {}", self.output);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write intake template");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }
}
