//! Visual report document
//!
//! The report is a sparse, human-oriented view of the collection: every
//! record becomes a section of grouped label/value items, and anything the
//! user did not fill in is left out entirely. Items are dropped when their
//! value is empty, zero, failed numeric validation, or is one of the
//! Unspecified / No data sentinels; groups with no items are dropped too.
//!
//! The document is plain data. Turning it into bytes is the job of a
//! [`ReportRenderer`](super::render::ReportRenderer).

use super::columns::{columns_for, Column, Topic};
use super::format::{format_currency, format_thousands, format_timestamp};
use super::validate::validate_records;
use crate::domain::fields::{Field, NumericField, TextField};
use crate::domain::ids::RecordId;
use crate::domain::record::WarehouseRecord;
use crate::domain::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Default report heading
pub const DEFAULT_REPORT_TITLE: &str = "Warehouse Comparison Report";

/// Default currency code shown with the total price
pub const DEFAULT_CURRENCY_CODE: &str = "THB";

/// Presentation settings for the visual report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    pub currency_code: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

/// A complete report ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    /// Formatted generation timestamp
    pub generated_at: String,
    pub sections: Vec<ReportSection>,
}

/// One record's section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub record_id: RecordId,
    /// One-based position in the collection
    pub position: usize,
    pub title: String,
    pub subtitle: Option<String>,
    pub groups: Vec<ReportGroup>,
    pub photos: Vec<ReportPhoto>,
}

/// A titled block of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportGroup {
    pub topic: Topic,
    pub title: &'static str,
    pub items: Vec<ReportItem>,
}

/// A single label/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    #[serde(skip)]
    pub field: Field,
    pub label: &'static str,
    pub value: ReportValue,
}

/// How an item value should be presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ReportValue {
    /// Short inline text
    Text(String),
    /// A web address, rendered as a link
    Link(String),
    /// Multi-line free text
    Paragraph(String),
}

impl ReportValue {
    /// The displayed text
    pub fn text(&self) -> &str {
        match self {
            ReportValue::Text(t) | ReportValue::Link(t) | ReportValue::Paragraph(t) => t,
        }
    }
}

/// A gallery image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportPhoto {
    pub image: String,
    pub caption: Option<String>,
    pub alt: String,
}

/// Build the visual report document for a list of records
///
/// # Errors
///
/// Returns an error if the list is empty or contains malformed records.
pub fn export_visual(
    records: &[WarehouseRecord],
    generated_at: NaiveDateTime,
    options: &ReportOptions,
) -> Result<ReportDocument> {
    validate_records(records)?;

    let sections = records
        .iter()
        .enumerate()
        .map(|(index, record)| build_section(record, index + 1, options))
        .collect();

    Ok(ReportDocument {
        title: options.title.clone(),
        generated_at: format_timestamp(generated_at),
        sections,
    })
}

fn build_section(record: &WarehouseRecord, position: usize, options: &ReportOptions) -> ReportSection {
    let option_label = format!("Warehouse Option #{position}");
    let name = record.project_name().trim();
    let (title, subtitle) = if name.is_empty() {
        (option_label, None)
    } else {
        (name.to_string(), Some(option_label))
    };

    let groups = Topic::REPORT_ORDER
        .iter()
        .filter_map(|&topic| {
            let items: Vec<ReportItem> = columns_for(topic)
                .filter(|c| c.field != Field::Text(TextField::ProjectName))
                .filter_map(|c| report_item(record, c, options))
                .collect();
            (!items.is_empty()).then(|| ReportGroup {
                topic,
                title: topic.title(),
                items,
            })
        })
        .collect();

    let photos = record
        .photos()
        .iter()
        .enumerate()
        .map(|(i, photo)| ReportPhoto {
            image: photo.image.clone(),
            caption: photo.caption.clone(),
            alt: format!("Warehouse {} photo {}", record.id(), i + 1),
        })
        .collect();

    ReportSection {
        record_id: record.id(),
        position,
        title,
        subtitle,
        groups,
        photos,
    }
}

fn report_item(record: &WarehouseRecord, column: &Column, options: &ReportOptions) -> Option<ReportItem> {
    let value = match column.field {
        Field::Text(TextField::GoogleMapsLink) => {
            let link = non_empty(record.text(TextField::GoogleMapsLink))?;
            if is_web_link(&link) {
                ReportValue::Link(link)
            } else {
                ReportValue::Text(link)
            }
        }
        Field::Text(TextField::Notes) => ReportValue::Paragraph(non_empty(record.text(TextField::Notes))?),
        Field::Text(f) => ReportValue::Text(non_empty(record.text(f))?),
        Field::Numeric(f) => {
            let value = record.numeric(f).value()?;
            match f {
                NumericField::Area | NumericField::RentPerSqm => ReportValue::Text(format_thousands(value)),
                _ => ReportValue::Text(value.to_string()),
            }
        }
        Field::TotalPrice => {
            let total = record.total_price();
            if total.is_zero() {
                return None;
            }
            ReportValue::Text(format_currency(total, &options.currency_code))
        }
        Field::Feature(f) => {
            let state = record.feature(f);
            if !state.is_specified() {
                return None;
            }
            ReportValue::Text(state.label().to_string())
        }
        Field::FactoryLicense => {
            let status = record.factory_license();
            if !status.is_specified() {
                return None;
            }
            ReportValue::Text(status.label().to_string())
        }
        Field::FloodRisk => {
            let risk = record.flood_risk();
            if !risk.is_specified() {
                return None;
            }
            ReportValue::Text(risk.label().to_string())
        }
    };

    Some(ReportItem {
        field: column.field,
        label: column.label,
        value,
    })
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_web_link(text: &str) -> bool {
    url::Url::parse(text)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
