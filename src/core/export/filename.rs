//! Suggested file names for exported reports

use crate::domain::fields::{NumericField, TextField};
use crate::domain::record::WarehouseRecord;

/// Stem used when the first record has nothing to name the file after
pub const DEFAULT_FILE_STEM: &str = "warehouse-comparison-report";

/// Derive a file stem from the first record's name, location, area and rate
///
/// # Examples
///
/// ```
/// use warehouse_compare::core::export::filename::suggested_file_stem;
/// use warehouse_compare::core::store::RecordStore;
///
/// let mut store = RecordStore::default();
/// let id = store.records()[0].id();
/// store.update_field_raw(id, "projectName", "Bang Na DC").unwrap();
/// store.update_field_raw(id, "area", "7150").unwrap();
///
/// let stem = suggested_file_stem(store.records().first(), "report");
/// assert_eq!(stem, "bang-na-dc-7150sqm");
/// ```
pub fn suggested_file_stem(first: Option<&WarehouseRecord>, fallback: &str) -> String {
    let Some(record) = first else {
        return fallback.to_string();
    };

    let mut parts = vec![
        record.text(TextField::ProjectName).to_string(),
        record.text(TextField::Location).to_string(),
    ];
    if let Some(area) = record.numeric(NumericField::Area).value() {
        parts.push(format!("{area}sqm"));
    }
    if let Some(rate) = record.numeric(NumericField::RentPerSqm).value() {
        parts.push(format!("{rate} per sqm"));
    }

    let stem = slugify(&parts.join(" "));
    if stem.is_empty() {
        fallback.to_string()
    } else {
        stem
    }
}

/// Lowercase, strip everything but alphanumerics, join words with single hyphens
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if (ch.is_whitespace() || ch == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
