//! Canonical column order and human-readable labels

use crate::domain::fields::{FeatureField, Field, NumericField, TextField};
use serde::Serialize;

/// Header of the leading rank column
pub const RANK_HEADER: &str = "#";

/// Topic a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    General,
    Costs,
    Structure,
    Utilities,
    Safety,
    Logistics,
    Risks,
    Notes,
}

impl Topic {
    /// Group order used by the visual report
    pub const REPORT_ORDER: [Topic; 8] = [
        Topic::General,
        Topic::Costs,
        Topic::Structure,
        Topic::Logistics,
        Topic::Utilities,
        Topic::Safety,
        Topic::Risks,
        Topic::Notes,
    ];

    /// Group heading
    pub fn title(self) -> &'static str {
        match self {
            Topic::General => "General Information",
            Topic::Costs => "Costs & Lease",
            Topic::Structure => "Structure & Specs",
            Topic::Utilities => "Utilities",
            Topic::Safety => "Safety & Facilities",
            Topic::Logistics => "Transport & Logistics",
            Topic::Risks => "Potential & Risks",
            Topic::Notes => "Notes / Highlights",
        }
    }
}

/// One exported column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub field: Field,
    pub topic: Topic,
    pub label: &'static str,
}

const fn col(field: Field, topic: Topic, label: &'static str) -> Column {
    Column {
        field,
        topic,
        label,
    }
}

/// Every record field in canonical order; photos are not columns
pub const COLUMNS: &[Column] = &[
    // General
    col(Field::Text(TextField::ProjectName), Topic::General, "Project / Owner"),
    col(Field::Text(TextField::Location), Topic::General, "Location"),
    col(Field::Text(TextField::GoogleMapsLink), Topic::General, "Google Maps Link"),
    col(Field::Numeric(NumericField::Area), Topic::General, "Usable Area (sqm)"),
    col(Field::Text(TextField::UsableAreaBreakdown), Topic::General, "Area Breakdown"),
    col(Field::Text(TextField::BuildingType), Topic::General, "Building Type"),
    col(Field::Numeric(NumericField::Height), Topic::General, "Clear Height (m)"),
    // Costs & lease
    col(Field::Numeric(NumericField::RentPerSqm), Topic::Costs, "Rental Rate (per sqm)"),
    col(Field::TotalPrice, Topic::Costs, "Total Price (per month)"),
    col(Field::Numeric(NumericField::DepositMonths), Topic::Costs, "Deposit (months)"),
    col(Field::Text(TextField::LeaseTerms), Topic::Costs, "Lease Terms"),
    col(Field::Text(TextField::HiddenCosts), Topic::Costs, "Hidden Costs"),
    // Structure & specs
    col(Field::Numeric(NumericField::FloorLoad), Topic::Structure, "Floor Load (ton/sqm)"),
    col(Field::Numeric(NumericField::LoadingBays), Topic::Structure, "Loading Bays"),
    col(Field::Feature(FeatureField::DockLeveler), Topic::Structure, "Dock Leveler"),
    col(Field::Text(TextField::ColumnType), Topic::Structure, "Column"),
    col(Field::Text(TextField::RoofFrameType), Topic::Structure, "Roof Frame"),
    col(Field::Text(TextField::RoofingMaterial), Topic::Structure, "Roofing"),
    col(Field::Text(TextField::WallingMaterial), Topic::Structure, "Walling"),
    col(Field::Text(TextField::FlooringDetails), Topic::Structure, "Flooring"),
    col(Field::Text(TextField::DoorType), Topic::Structure, "Doors"),
    col(Field::Text(TextField::WeatherSystems), Topic::Structure, "Weather Protection"),
    col(Field::Text(TextField::OptionalSystems), Topic::Structure, "Optional Systems"),
    // Utilities
    col(Field::Text(TextField::Electricity), Topic::Utilities, "Electricity (KVA)"),
    col(Field::Text(TextField::WaterSupply), Topic::Utilities, "Water Supply"),
    col(Field::Text(TextField::WasteManagement), Topic::Utilities, "Waste Management"),
    col(Field::Feature(FeatureField::FiberOptic), Topic::Utilities, "Fiber Optic"),
    // Safety & facilities
    col(Field::Feature(FeatureField::Security), Topic::Safety, "24h Security"),
    col(Field::Feature(FeatureField::Cctv), Topic::Safety, "CCTV"),
    col(Field::Feature(FeatureField::Sprinkler), Topic::Safety, "Sprinkler"),
    col(Field::Text(TextField::FireSafetySystems), Topic::Safety, "Other Fire Safety"),
    col(Field::Text(TextField::Parking), Topic::Safety, "Parking"),
    col(Field::Text(TextField::OfficeFacilities), Topic::Safety, "Office Facilities"),
    // Logistics
    col(Field::Feature(FeatureField::NearExpressway), Topic::Logistics, "Near Expressway"),
    col(Field::Text(TextField::LogisticsProximity), Topic::Logistics, "Logistics Proximity"),
    col(
        Field::Text(TextField::TruckAccessRestrictions),
        Topic::Logistics,
        "Truck Access Restrictions",
    ),
    // Potential & risks
    col(Field::Feature(FeatureField::PurpleZone), Topic::Risks, "Purple Zone"),
    col(Field::FactoryLicense, Topic::Risks, "Factory License (Ror.4)"),
    col(Field::FloodRisk, Topic::Risks, "Flood Risk"),
    col(Field::Text(TextField::ExpansionPotential), Topic::Risks, "Expansion Potential"),
    // Notes
    col(Field::Text(TextField::Notes), Topic::Notes, "Notes / Highlights"),
];

/// Columns belonging to one topic, in canonical order
pub fn columns_for(topic: Topic) -> impl Iterator<Item = &'static Column> {
    COLUMNS.iter().filter(move |c| c.topic == topic)
}

/// Human-readable label of a field
pub fn label(field: Field) -> &'static str {
    COLUMNS
        .iter()
        .find(|c| c.field == field)
        .map(|c| c.label)
        .unwrap_or_else(|| field.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_field_has_exactly_one_column() {
        let all: Vec<Field> = TextField::iter()
            .map(Field::Text)
            .chain(NumericField::iter().map(Field::Numeric))
            .chain(FeatureField::iter().map(Field::Feature))
            .chain([Field::FactoryLicense, Field::FloodRisk, Field::TotalPrice])
            .collect();

        let columns: HashSet<Field> = COLUMNS.iter().map(|c| c.field).collect();
        assert_eq!(columns.len(), COLUMNS.len());
        assert_eq!(columns.len(), all.len());
        for field in all {
            assert!(columns.contains(&field), "missing column for {field}");
        }
    }

    #[test]
    fn test_report_order_covers_all_topics() {
        let topics: HashSet<Topic> = COLUMNS.iter().map(|c| c.topic).collect();
        assert_eq!(topics.len(), Topic::REPORT_ORDER.len());
        for topic in Topic::REPORT_ORDER {
            assert!(topics.contains(&topic));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(Field::TotalPrice), "Total Price (per month)");
        assert_eq!(label(Field::FactoryLicense), "Factory License (Ror.4)");
        assert_eq!(
            columns_for(Topic::Logistics).count(),
            3,
            "logistics has three columns"
        );
    }
}
