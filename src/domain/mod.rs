//! Domain models and types for Warehouse Compare.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`])
//! - **The record model** ([`WarehouseRecord`], [`NumericInput`], [`Photo`])
//! - **Categorical option sets** ([`TriState`], [`LicenseStatus`], [`FloodRisk`])
//! - **Typed field updates** ([`FieldUpdate`] over [`TextField`], [`NumericField`], [`FeatureField`])
//! - **Error types** ([`WarehouseError`]) and the [`Result`] alias
//!
//! # Field Updates
//!
//! Input events carry a field name and the raw text the user entered. They
//! are parsed into a [`FieldUpdate`] first, so unknown fields and invalid
//! option labels are rejected before a record is touched:
//!
//! ```rust
//! use warehouse_compare::domain::{FieldUpdate, RecordId, WarehouseRecord};
//! use rust_decimal::Decimal;
//!
//! # fn example() -> warehouse_compare::domain::Result<()> {
//! let mut record = WarehouseRecord::new(RecordId::new(1).map_err(warehouse_compare::domain::WarehouseError::MalformedRecord)?);
//! record.apply(&FieldUpdate::parse("area", "7150")?);
//! record.apply(&FieldUpdate::parse("rentPerSqm", "150")?);
//! assert_eq!(record.total_price(), Decimal::from(1_072_500));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod fields;
pub mod ids;
pub mod options;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::WarehouseError;
pub use fields::{FeatureField, Field, FieldUpdate, NumericField, TextField};
pub use ids::RecordId;
pub use options::{FloodRisk, LicenseStatus, TriState};
pub use record::{NumericInput, NumericState, Photo, WarehouseRecord, MAX_NUMERIC_INPUT};
pub use result::Result;
