//! Result type alias for Warehouse Compare

use super::errors::WarehouseError;

/// Result type alias for Warehouse Compare operations
///
/// # Examples
///
/// ```
/// use warehouse_compare::domain::result::Result;
/// use warehouse_compare::domain::errors::WarehouseError;
///
/// fn failing_function() -> Result<()> {
///     Err(WarehouseError::Export("renderer unavailable".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, WarehouseError>;
