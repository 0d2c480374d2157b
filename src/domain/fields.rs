//! Field selectors and typed field updates
//!
//! Every editable attribute of a [`WarehouseRecord`](super::record::WarehouseRecord)
//! is named by one of the selector enums below. Input events arrive as
//! `(fieldName, rawValue)` string pairs and are parsed into a [`FieldUpdate`]
//! before they reach the store, so the store itself only ever sees typed
//! values and matches exhaustively over the field set.

use super::options::{FloodRisk, LicenseStatus, TriState};
use crate::domain::{Result, WarehouseError};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Free-text fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum TextField {
    ProjectName,
    Location,
    GoogleMapsLink,
    UsableAreaBreakdown,
    BuildingType,
    LeaseTerms,
    HiddenCosts,
    ColumnType,
    RoofFrameType,
    RoofingMaterial,
    WallingMaterial,
    FlooringDetails,
    DoorType,
    WeatherSystems,
    OptionalSystems,
    Electricity,
    WaterSupply,
    WasteManagement,
    FireSafetySystems,
    Parking,
    OfficeFacilities,
    LogisticsProximity,
    TruckAccessRestrictions,
    ExpansionPotential,
    Notes,
}

/// Numeric input fields, validated as positive numbers when non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum NumericField {
    Area,
    Height,
    #[strum(to_string = "rentPerSqm", serialize = "ratePerArea")]
    RentPerSqm,
    DepositMonths,
    FloorLoad,
    LoadingBays,
}

impl NumericField {
    /// Whether a change to this field requires the total price to be recomputed
    pub fn feeds_total_price(self) -> bool {
        matches!(self, NumericField::Area | NumericField::RentPerSqm)
    }
}

/// Yes / No / Unspecified feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum FeatureField {
    #[strum(serialize = "hasDockLeveler")]
    DockLeveler,
    #[strum(serialize = "hasFiberOptic")]
    FiberOptic,
    #[strum(serialize = "hasSecurity")]
    Security,
    #[strum(serialize = "cctv")]
    Cctv,
    #[strum(serialize = "hasSprinkler")]
    Sprinkler,
    #[strum(serialize = "nearExpressway")]
    NearExpressway,
    #[strum(serialize = "isPurpleZone")]
    PurpleZone,
}

/// Any column of a record, including the derived total price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Text(TextField),
    Numeric(NumericField),
    Feature(FeatureField),
    FactoryLicense,
    FloodRisk,
    TotalPrice,
}

impl Field {
    /// Canonical field name used at the input boundary
    pub fn name(self) -> &'static str {
        match self {
            Field::Text(f) => f.into(),
            Field::Numeric(f) => f.into(),
            Field::Feature(f) => f.into(),
            Field::FactoryLicense => "hasRor4",
            Field::FloodRisk => "floodRisk",
            Field::TotalPrice => "totalPrice",
        }
    }

    /// Whether the field is computed rather than entered
    pub fn is_derived(self) -> bool {
        matches!(self, Field::TotalPrice)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = WarehouseError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if let Ok(f) = TextField::from_str(name) {
            return Ok(Field::Text(f));
        }
        if let Ok(f) = NumericField::from_str(name) {
            return Ok(Field::Numeric(f));
        }
        if let Ok(f) = FeatureField::from_str(name) {
            return Ok(Field::Feature(f));
        }
        match name {
            "hasRor4" | "factoryLicense" => Ok(Field::FactoryLicense),
            "floodRisk" => Ok(Field::FloodRisk),
            "totalPrice" => Ok(Field::TotalPrice),
            _ => Err(WarehouseError::UnknownField(name.to_string())),
        }
    }
}

/// A single typed field assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(TextField, String),
    /// Raw text as typed; validated by the record, never rejected
    Numeric(NumericField, String),
    Feature(FeatureField, TriState),
    FactoryLicense(LicenseStatus),
    FloodRisk(FloodRisk),
}

impl FieldUpdate {
    /// Parses an input event into a typed update
    ///
    /// # Errors
    ///
    /// Returns an error if the field name is unknown, names the derived total
    /// price, or a categorical value is not one of the field's options.
    ///
    /// # Examples
    ///
    /// ```
    /// use warehouse_compare::domain::fields::{FieldUpdate, NumericField};
    ///
    /// let update = FieldUpdate::parse("area", "7150").unwrap();
    /// assert_eq!(update, FieldUpdate::Numeric(NumericField::Area, "7150".to_string()));
    /// assert!(FieldUpdate::parse("totalPrice", "1").is_err());
    /// ```
    pub fn parse(field_name: &str, raw: &str) -> Result<Self> {
        let field = Field::from_str(field_name)?;
        let with_field = |err: WarehouseError| match err {
            WarehouseError::InvalidValue { value, .. } => WarehouseError::InvalidValue {
                field: field.name().to_string(),
                value,
            },
            other => other,
        };

        match field {
            Field::Text(f) => Ok(FieldUpdate::Text(f, raw.to_string())),
            Field::Numeric(f) => Ok(FieldUpdate::Numeric(f, raw.to_string())),
            Field::Feature(f) => Ok(FieldUpdate::Feature(
                f,
                TriState::from_str(raw).map_err(with_field)?,
            )),
            Field::FactoryLicense => Ok(FieldUpdate::FactoryLicense(
                LicenseStatus::from_str(raw).map_err(with_field)?,
            )),
            Field::FloodRisk => Ok(FieldUpdate::FloodRisk(
                FloodRisk::from_str(raw).map_err(with_field)?,
            )),
            Field::TotalPrice => Err(WarehouseError::DerivedField(field.name().to_string())),
        }
    }

    /// The field this update targets
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Text(f, _) => Field::Text(*f),
            FieldUpdate::Numeric(f, _) => Field::Numeric(*f),
            FieldUpdate::Feature(f, _) => Field::Feature(*f),
            FieldUpdate::FactoryLicense(_) => Field::FactoryLicense,
            FieldUpdate::FloodRisk(_) => Field::FloodRisk,
        }
    }
}
