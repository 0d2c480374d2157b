//! Core business logic for Warehouse Compare.
//!
//! # Modules
//!
//! - [`store`] - In-memory record collection with derived total price
//! - [`export`] - Comparison table, visual report and their file output
//!
//! # Export Workflow
//!
//! 1. **Collect**: Apply field updates and photos to a [`store::RecordStore`]
//! 2. **Snapshot**: Take an immutable [`store::RecordSnapshot`]
//! 3. **Table**: Flatten the snapshot into a CSV table
//! 4. **Report**: Build a sparse report document and render it
//! 5. **Write**: Persist each artifact atomically
//!
//! # Example
//!
//! ```rust,no_run
//! use warehouse_compare::core::export::{export_table, HtmlRenderer, VisualExporter};
//! use warehouse_compare::core::store::RecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = RecordStore::default();
//! let id = store.records()[0].id();
//! store.update_field_raw(id, "projectName", "Bang Na DC")?;
//!
//! let table = export_table(store.records())?;
//! table.write_csv(std::io::stdout())?;
//!
//! let path = VisualExporter::new(HtmlRenderer, "exports")
//!     .export(store.snapshot())
//!     .await?;
//! println!("Report written to {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod store;
