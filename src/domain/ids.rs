//! Domain identifier types with validation
//!
//! Record identifiers are allocated by a [`RecordStore`](crate::core::store::RecordStore)
//! from its own monotonic counter. Zero is reserved so that a zeroed or
//! hand-edited snapshot can be detected as corrupt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Warehouse record identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use warehouse_compare::domain::ids::RecordId;
/// use std::str::FromStr;
///
/// let id = RecordId::from_str("42").unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(RecordId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a new RecordId
    ///
    /// # Returns
    ///
    /// Returns `Ok(RecordId)` if the ID is non-zero, `Err` otherwise
    pub fn new(id: u64) -> Result<Self, String> {
        if id == 0 {
            return Err("Record ID cannot be zero".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the numeric value of the ID
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Returns the ID that follows this one
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// First ID handed out by a fresh store
    pub(crate) fn first() -> Self {
        Self(1)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid record ID: {s}"))?;
        Self::new(id)
    }
}

impl TryFrom<u64> for RecordId {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_creation() {
        let id = RecordId::new(7).unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_record_id_zero_fails() {
        assert!(RecordId::new(0).is_err());
        assert!(RecordId::from_str("0").is_err());
    }

    #[test]
    fn test_record_id_from_str() {
        let id: RecordId = " 12 ".parse().unwrap();
        assert_eq!(id.get(), 12);
        assert!(RecordId::from_str("abc").is_err());
    }

    #[test]
    fn test_record_id_next_is_monotonic() {
        let first = RecordId::first();
        assert_eq!(first.get(), 1);
        assert!(first.next() > first);
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId::new(5).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");
        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
        assert!(serde_json::from_str::<RecordId>("0").is_err());
    }
}
