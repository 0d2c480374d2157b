//! Categorical option sets
//!
//! Feature flags, the factory license (Ror.4) status and the flood risk
//! rating each take one value from a small closed set. Every set has a
//! sentinel meaning "nothing was entered"; sentinels are what a blank record
//! starts with and are never shown in the visual report.

use crate::domain::{Result, WarehouseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoStaticStr};

/// Yes / No / Unspecified
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
pub enum TriState {
    #[strum(serialize = "Yes")]
    Yes,
    #[strum(serialize = "No")]
    No,
    #[default]
    #[strum(serialize = "Unspecified")]
    Unspecified,
}

impl TriState {
    /// Display label written to exports
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Whether a value was actually chosen
    pub fn is_specified(self) -> bool {
        self != TriState::Unspecified
    }
}

impl FromStr for TriState {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "ใช่" => Ok(Self::Yes),
            "no" | "n" | "false" | "ไม่ใช่" => Ok(Self::No),
            "" | "unspecified" | "ไม่ระบุ" => Ok(Self::Unspecified),
            _ => Err(WarehouseError::InvalidValue {
                field: "tri-state".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Factory license (Ror.4) status: Present / Absent / Unspecified
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
pub enum LicenseStatus {
    #[strum(serialize = "Present")]
    Present,
    #[strum(serialize = "Absent")]
    Absent,
    #[default]
    #[strum(serialize = "Unspecified")]
    Unspecified,
}

impl LicenseStatus {
    /// Display label written to exports
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Whether a value was actually chosen
    pub fn is_specified(self) -> bool {
        self != LicenseStatus::Unspecified
    }
}

impl FromStr for LicenseStatus {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" | "yes" | "มี" => Ok(Self::Present),
            "absent" | "no" | "ไม่มี" => Ok(Self::Absent),
            "" | "unspecified" | "ไม่ระบุ" => Ok(Self::Unspecified),
            _ => Err(WarehouseError::InvalidValue {
                field: "hasRor4".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Flood risk rating, ordered by severity with `NoData` last
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
pub enum FloodRisk {
    #[strum(serialize = "Low")]
    Low,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "High")]
    High,
    #[default]
    #[strum(serialize = "No data")]
    NoData,
}

impl FloodRisk {
    /// Display label written to exports
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Whether a rating was actually chosen
    pub fn is_specified(self) -> bool {
        self != FloodRisk::NoData
    }
}

impl FromStr for FloodRisk {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "ต่ำ" => Ok(Self::Low),
            "medium" | "ปานกลาง" => Ok(Self::Medium),
            "high" | "สูง" => Ok(Self::High),
            "" | "no data" | "nodata" | "no-data" | "ไม่มีข้อมูล" => Ok(Self::NoData),
            _ => Err(WarehouseError::InvalidValue {
                field: "floodRisk".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

macro_rules! impl_label_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_label_display!(TriState, LicenseStatus, FloodRisk);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("Yes", TriState::Yes; "english yes")]
    #[test_case("no", TriState::No; "lowercase no")]
    #[test_case("ใช่", TriState::Yes; "thai yes")]
    #[test_case("ไม่ระบุ", TriState::Unspecified; "thai unspecified")]
    #[test_case("", TriState::Unspecified; "blank")]
    fn test_tri_state_from_str(input: &str, expected: TriState) {
        assert_eq!(TriState::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_tri_state_invalid() {
        assert!(TriState::from_str("maybe").is_err());
    }

    #[test]
    fn test_defaults_are_sentinels() {
        assert!(!TriState::default().is_specified());
        assert!(!LicenseStatus::default().is_specified());
        assert!(!FloodRisk::default().is_specified());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TriState::Unspecified.label(), "Unspecified");
        assert_eq!(LicenseStatus::Present.to_string(), "Present");
        assert_eq!(FloodRisk::NoData.label(), "No data");
    }

    #[test]
    fn test_flood_risk_ordering() {
        let ordered: Vec<FloodRisk> = FloodRisk::iter().collect();
        assert_eq!(
            ordered,
            vec![
                FloodRisk::Low,
                FloodRisk::Medium,
                FloodRisk::High,
                FloodRisk::NoData
            ]
        );
        assert!(FloodRisk::Low < FloodRisk::High);
    }

    #[test]
    fn test_license_from_thai_labels() {
        assert_eq!(LicenseStatus::from_str("มี").unwrap(), LicenseStatus::Present);
        assert_eq!(
            LicenseStatus::from_str("ไม่มี").unwrap(),
            LicenseStatus::Absent
        );
        assert!(LicenseStatus::from_str("pending").is_err());
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for risk in FloodRisk::iter() {
            assert_eq!(FloodRisk::from_str(risk.label()).unwrap(), risk);
        }
    }
}
