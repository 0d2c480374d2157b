//! Warehouse record domain model
//!
//! A [`WarehouseRecord`] describes one candidate property. Fields are only
//! mutated through [`WarehouseRecord::apply`], which keeps the derived total
//! price in step with the area and rental rate.

use super::fields::{FeatureField, FieldUpdate, NumericField, TextField};
use super::ids::RecordId;
use super::options::{FloodRisk, LicenseStatus, TriState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw numeric input together with its validation state
///
/// The text the user typed is always kept, even when it does not parse, so
/// the form can show it back. Only strictly positive numbers up to
/// [`MAX_NUMERIC_INPUT`] are valid; digit separators such as `7_150` are not
/// accepted.
///
/// # Examples
///
/// ```
/// use warehouse_compare::domain::record::{NumericInput, NumericState};
/// use rust_decimal::Decimal;
///
/// assert_eq!(NumericInput::new("150").state(), NumericState::Valid(Decimal::from(150)));
/// assert_eq!(NumericInput::new("").state(), NumericState::Blank);
/// assert_eq!(NumericInput::new("-3").state(), NumericState::Invalid);
/// assert_eq!(NumericInput::new("7_150").state(), NumericState::Invalid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericInput(String);

/// Largest accepted numeric input
///
/// Two values at this bound multiply to 10^28, which still fits in a
/// [`Decimal`], so the total price of two valid inputs is always exact.
pub const MAX_NUMERIC_INPUT: i64 = 100_000_000_000_000;

/// Validation state of a [`NumericInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericState {
    Blank,
    Valid(Decimal),
    Invalid,
}

impl NumericInput {
    /// Wraps raw input text
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text exactly as entered
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Classifies the raw text
    pub fn state(&self) -> NumericState {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            return NumericState::Blank;
        }
        if trimmed.contains('_') {
            return NumericState::Invalid;
        }
        match Decimal::from_str(trimmed) {
            Ok(value) if value > Decimal::ZERO && value <= Decimal::from(MAX_NUMERIC_INPUT) => {
                NumericState::Valid(value.normalize())
            }
            _ => NumericState::Invalid,
        }
    }

    /// The parsed value, if the input is a valid positive number
    pub fn value(&self) -> Option<Decimal> {
        match self.state() {
            NumericState::Valid(v) => Some(v),
            NumericState::Blank | NumericState::Invalid => None,
        }
    }

    /// Whether the input is non-empty but not a positive number
    pub fn is_invalid(&self) -> bool {
        self.state() == NumericState::Invalid
    }

    /// Whether nothing was entered
    pub fn is_blank(&self) -> bool {
        self.state() == NumericState::Blank
    }
}

/// A photo attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image reference: a URL, a file path or a `data:` URL
    pub image: String,

    /// Optional caption shown under the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Photo {
    /// Creates a photo without a caption
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            caption: None,
        }
    }

    /// Sets the caption; blank captions are stored as `None`
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.set_caption(caption);
        self
    }

    pub(crate) fn set_caption(&mut self, caption: impl Into<String>) {
        let caption = caption.into();
        self.caption = if caption.trim().is_empty() {
            None
        } else {
            Some(caption)
        };
    }
}

/// One candidate warehouse or factory property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseRecord {
    id: RecordId,

    // General
    project_name: String,
    location: String,
    google_maps_link: String,
    area: NumericInput,
    usable_area_breakdown: String,
    building_type: String,
    height: NumericInput,

    // Costs & lease
    rent_per_sqm: NumericInput,
    total_price: Decimal,
    deposit_months: NumericInput,
    lease_terms: String,
    hidden_costs: String,

    // Structure & specs
    floor_load: NumericInput,
    loading_bays: NumericInput,
    has_dock_leveler: TriState,
    column_type: String,
    roof_frame_type: String,
    roofing_material: String,
    walling_material: String,
    flooring_details: String,
    door_type: String,
    weather_systems: String,
    optional_systems: String,

    // Utilities
    electricity: String,
    water_supply: String,
    waste_management: String,
    has_fiber_optic: TriState,

    // Safety & facilities
    has_security: TriState,
    cctv: TriState,
    has_sprinkler: TriState,
    fire_safety_systems: String,
    parking: String,
    office_facilities: String,

    // Logistics
    near_expressway: TriState,
    logistics_proximity: String,
    truck_access_restrictions: String,

    // Potential & risks
    is_purple_zone: TriState,
    has_ror4: LicenseStatus,
    flood_risk: FloodRisk,
    expansion_potential: String,

    notes: String,

    photos: Vec<Photo>,
}

impl WarehouseRecord {
    /// Creates a blank record: empty text, blank numbers, every option at its sentinel
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            project_name: String::new(),
            location: String::new(),
            google_maps_link: String::new(),
            area: NumericInput::default(),
            usable_area_breakdown: String::new(),
            building_type: String::new(),
            height: NumericInput::default(),
            rent_per_sqm: NumericInput::default(),
            total_price: Decimal::ZERO,
            deposit_months: NumericInput::default(),
            lease_terms: String::new(),
            hidden_costs: String::new(),
            floor_load: NumericInput::default(),
            loading_bays: NumericInput::default(),
            has_dock_leveler: TriState::Unspecified,
            column_type: String::new(),
            roof_frame_type: String::new(),
            roofing_material: String::new(),
            walling_material: String::new(),
            flooring_details: String::new(),
            door_type: String::new(),
            weather_systems: String::new(),
            optional_systems: String::new(),
            electricity: String::new(),
            water_supply: String::new(),
            waste_management: String::new(),
            has_fiber_optic: TriState::Unspecified,
            has_security: TriState::Unspecified,
            cctv: TriState::Unspecified,
            has_sprinkler: TriState::Unspecified,
            fire_safety_systems: String::new(),
            parking: String::new(),
            office_facilities: String::new(),
            near_expressway: TriState::Unspecified,
            logistics_proximity: String::new(),
            truck_access_restrictions: String::new(),
            is_purple_zone: TriState::Unspecified,
            has_ror4: LicenseStatus::Unspecified,
            flood_risk: FloodRisk::NoData,
            expansion_potential: String::new(),
            notes: String::new(),
            photos: Vec::new(),
        }
    }

    /// Record identifier
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Project or owner name
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Monthly total price, `area × rent_per_sqm` or zero
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    /// Factory license (Ror.4) status
    pub fn factory_license(&self) -> LicenseStatus {
        self.has_ror4
    }

    /// Flood risk rating
    pub fn flood_risk(&self) -> FloodRisk {
        self.flood_risk
    }

    /// Attached photos in attachment order
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub(crate) fn photos_mut(&mut self) -> &mut Vec<Photo> {
        &mut self.photos
    }

    /// Value of a free-text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::ProjectName => &self.project_name,
            TextField::Location => &self.location,
            TextField::GoogleMapsLink => &self.google_maps_link,
            TextField::UsableAreaBreakdown => &self.usable_area_breakdown,
            TextField::BuildingType => &self.building_type,
            TextField::LeaseTerms => &self.lease_terms,
            TextField::HiddenCosts => &self.hidden_costs,
            TextField::ColumnType => &self.column_type,
            TextField::RoofFrameType => &self.roof_frame_type,
            TextField::RoofingMaterial => &self.roofing_material,
            TextField::WallingMaterial => &self.walling_material,
            TextField::FlooringDetails => &self.flooring_details,
            TextField::DoorType => &self.door_type,
            TextField::WeatherSystems => &self.weather_systems,
            TextField::OptionalSystems => &self.optional_systems,
            TextField::Electricity => &self.electricity,
            TextField::WaterSupply => &self.water_supply,
            TextField::WasteManagement => &self.waste_management,
            TextField::FireSafetySystems => &self.fire_safety_systems,
            TextField::Parking => &self.parking,
            TextField::OfficeFacilities => &self.office_facilities,
            TextField::LogisticsProximity => &self.logistics_proximity,
            TextField::TruckAccessRestrictions => &self.truck_access_restrictions,
            TextField::ExpansionPotential => &self.expansion_potential,
            TextField::Notes => &self.notes,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::ProjectName => &mut self.project_name,
            TextField::Location => &mut self.location,
            TextField::GoogleMapsLink => &mut self.google_maps_link,
            TextField::UsableAreaBreakdown => &mut self.usable_area_breakdown,
            TextField::BuildingType => &mut self.building_type,
            TextField::LeaseTerms => &mut self.lease_terms,
            TextField::HiddenCosts => &mut self.hidden_costs,
            TextField::ColumnType => &mut self.column_type,
            TextField::RoofFrameType => &mut self.roof_frame_type,
            TextField::RoofingMaterial => &mut self.roofing_material,
            TextField::WallingMaterial => &mut self.walling_material,
            TextField::FlooringDetails => &mut self.flooring_details,
            TextField::DoorType => &mut self.door_type,
            TextField::WeatherSystems => &mut self.weather_systems,
            TextField::OptionalSystems => &mut self.optional_systems,
            TextField::Electricity => &mut self.electricity,
            TextField::WaterSupply => &mut self.water_supply,
            TextField::WasteManagement => &mut self.waste_management,
            TextField::FireSafetySystems => &mut self.fire_safety_systems,
            TextField::Parking => &mut self.parking,
            TextField::OfficeFacilities => &mut self.office_facilities,
            TextField::LogisticsProximity => &mut self.logistics_proximity,
            TextField::TruckAccessRestrictions => &mut self.truck_access_restrictions,
            TextField::ExpansionPotential => &mut self.expansion_potential,
            TextField::Notes => &mut self.notes,
        }
    }

    /// Value of a numeric input field
    pub fn numeric(&self, field: NumericField) -> &NumericInput {
        match field {
            NumericField::Area => &self.area,
            NumericField::Height => &self.height,
            NumericField::RentPerSqm => &self.rent_per_sqm,
            NumericField::DepositMonths => &self.deposit_months,
            NumericField::FloorLoad => &self.floor_load,
            NumericField::LoadingBays => &self.loading_bays,
        }
    }

    fn numeric_mut(&mut self, field: NumericField) -> &mut NumericInput {
        match field {
            NumericField::Area => &mut self.area,
            NumericField::Height => &mut self.height,
            NumericField::RentPerSqm => &mut self.rent_per_sqm,
            NumericField::DepositMonths => &mut self.deposit_months,
            NumericField::FloorLoad => &mut self.floor_load,
            NumericField::LoadingBays => &mut self.loading_bays,
        }
    }

    /// Value of a Yes / No / Unspecified feature flag
    pub fn feature(&self, field: FeatureField) -> TriState {
        match field {
            FeatureField::DockLeveler => self.has_dock_leveler,
            FeatureField::FiberOptic => self.has_fiber_optic,
            FeatureField::Security => self.has_security,
            FeatureField::Cctv => self.cctv,
            FeatureField::Sprinkler => self.has_sprinkler,
            FeatureField::NearExpressway => self.near_expressway,
            FeatureField::PurpleZone => self.is_purple_zone,
        }
    }

    fn feature_mut(&mut self, field: FeatureField) -> &mut TriState {
        match field {
            FeatureField::DockLeveler => &mut self.has_dock_leveler,
            FeatureField::FiberOptic => &mut self.has_fiber_optic,
            FeatureField::Security => &mut self.has_security,
            FeatureField::Cctv => &mut self.cctv,
            FeatureField::Sprinkler => &mut self.has_sprinkler,
            FeatureField::NearExpressway => &mut self.near_expressway,
            FeatureField::PurpleZone => &mut self.is_purple_zone,
        }
    }

    /// Applies a typed update and returns whether anything changed
    ///
    /// The total price is recomputed in the same call whenever the area or
    /// rental rate is touched, so no caller can observe a stale total.
    pub fn apply(&mut self, update: &FieldUpdate) -> bool {
        let changed = match update {
            FieldUpdate::Text(field, value) => replace_if_changed(self.text_mut(*field), value.clone()),
            FieldUpdate::Numeric(field, raw) => {
                replace_if_changed(self.numeric_mut(*field), NumericInput::new(raw.clone()))
            }
            FieldUpdate::Feature(field, value) => replace_if_changed(self.feature_mut(*field), *value),
            FieldUpdate::FactoryLicense(value) => replace_if_changed(&mut self.has_ror4, *value),
            FieldUpdate::FloodRisk(value) => replace_if_changed(&mut self.flood_risk, *value),
        };

        if let FieldUpdate::Numeric(field, _) = update {
            if field.feeds_total_price() {
                self.recompute_total_price();
            }
        }

        changed
    }

    /// Total price implied by the current area and rental rate
    pub fn expected_total_price(&self) -> Decimal {
        match (self.area.value(), self.rent_per_sqm.value()) {
            // Both factors are at most MAX_NUMERIC_INPUT, so the product fits
            (Some(area), Some(rate)) => area * rate,
            _ => Decimal::ZERO,
        }
    }

    fn recompute_total_price(&mut self) {
        self.total_price = self.expected_total_price();
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
