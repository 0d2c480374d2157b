//! Immutable record snapshots handed to exporters

use crate::domain::record::WarehouseRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Point-in-time copy of the record collection
///
/// Snapshots are cheap to clone and can be moved into an async render task
/// while the store keeps accepting edits.
#[derive(Debug, Clone)]
pub struct RecordSnapshot {
    records: Arc<[WarehouseRecord]>,
    taken_at: DateTime<Utc>,
}

impl RecordSnapshot {
    /// Wrap a list of records taken now
    pub fn new(records: Vec<WarehouseRecord>) -> Self {
        Self {
            records: records.into(),
            taken_at: Utc::now(),
        }
    }

    /// Records in collection order
    pub fn records(&self) -> &[WarehouseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the snapshot was taken
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// First record, used to name export files
    pub fn first(&self) -> Option<&WarehouseRecord> {
        self.records.first()
    }
}

impl From<Vec<WarehouseRecord>> for RecordSnapshot {
    fn from(records: Vec<WarehouseRecord>) -> Self {
        Self::new(records)
    }
}
