//! Snapshot checks run before any artifact is produced

use crate::domain::record::WarehouseRecord;
use crate::domain::{Result, WarehouseError};
use std::collections::HashSet;

/// Reject record lists an exporter cannot faithfully render
///
/// # Errors
///
/// Returns [`WarehouseError::Export`] for an empty list and
/// [`WarehouseError::MalformedRecord`] for duplicate IDs or a total price
/// that does not match the area and rental rate.
pub fn validate_records(records: &[WarehouseRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(WarehouseError::Export("No records to export".to_string()));
    }

    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(WarehouseError::MalformedRecord(format!(
                "duplicate record id {}",
                record.id()
            )));
        }
        if record.total_price() != record.expected_total_price() {
            return Err(WarehouseError::MalformedRecord(format!(
                "record {} has total price {} but area and rate give {}",
                record.id(),
                record.total_price(),
                record.expected_total_price()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    fn record(id: u64) -> WarehouseRecord {
        WarehouseRecord::new(RecordId::new(id).unwrap())
    }

    #[test]
    fn test_valid_records() {
        assert!(validate_records(&[record(1), record(2)]).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = validate_records(&[record(1), record(1)]).unwrap_err();
        assert!(matches!(err, WarehouseError::MalformedRecord(_)));
    }

    #[test]
    fn test_inconsistent_total_rejected() {
        let mut json = serde_json::to_value(record(1)).unwrap();
        json["area"] = "100".into();
        json["rentPerSqm"] = "10".into();
        json["totalPrice"] = "5".into();
        let tampered: WarehouseRecord = serde_json::from_value(json).unwrap();

        let err = validate_records(&[tampered]).unwrap_err();
        assert!(matches!(err, WarehouseError::MalformedRecord(_)));
        assert!(err.to_string().contains("total price"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            validate_records(&[]),
            Err(WarehouseError::Export(_))
        ));
    }
}
