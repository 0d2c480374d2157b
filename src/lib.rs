// Warehouse Compare - Warehouse Option Comparison Tool
// Copyright (c) 2025 Warehouse Compare Contributors
// Licensed under the MIT License

//! # Warehouse Compare
//!
//! Warehouse Compare collects structured descriptions of candidate
//! warehouse and factory properties and exports them as a side-by-side
//! comparison table or a shareable visual report.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Collecting** records field by field, with the monthly total price
//!   derived from area and rental rate on every update
//! - **Attaching** photos with captions, up to a configurable limit
//! - **Exporting** a CSV comparison table with a fixed header row
//! - **Rendering** a sparse visual report that leaves out anything unfilled
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (record store, exporters)
//! - [`adapters`] - External inputs (intake files)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use warehouse_compare::core::export::export_table;
//! use warehouse_compare::core::store::RecordStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = RecordStore::default();
//! let id = store.records()[0].id();
//!
//! store.update_field_raw(id, "projectName", "Bang Na DC")?;
//! store.update_field_raw(id, "area", "7150")?;
//! store.update_field_raw(id, "rentPerSqm", "150")?;
//!
//! let table = export_table(store.records())?;
//! assert_eq!(table.cell(0, "Total Price (per month)"), Some("1,072,500"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All library errors are [`domain::WarehouseError`] values. None of them is
//! fatal to a session: removing the last record, for example, is reported
//! as [`domain::WarehouseError::LastRecord`] and leaves the store untouched.
//!
//! ```rust
//! use warehouse_compare::core::store::RecordStore;
//! use warehouse_compare::domain::WarehouseError;
//!
//! let mut store = RecordStore::default();
//! let id = store.records()[0].id();
//! let err = store.remove_record(id).unwrap_err();
//! assert!(matches!(err, WarehouseError::LastRecord(_)));
//! assert_eq!(store.len(), 1);
//! ```
//!
//! ## Logging
//!
//! Warehouse Compare uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(records = 3, "Starting export");
//! warn!(field = "area", "Value must be a number greater than 0");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
