//! Tabular export
//!
//! This module flattens records into a fixed-header table, one row per
//! record, suitable for spreadsheet tools. Cells are plain strings:
//! - blank numbers, empty text and a zero total price become empty cells
//! - currency columns use `,` thousands separators
//! - categorical fields emit their label, including the sentinels
//! - numeric input that failed validation is written back as typed

use super::columns::{Column, COLUMNS, RANK_HEADER};
use super::format::format_thousands;
use super::validate::validate_records;
use crate::domain::fields::{Field, NumericField};
use crate::domain::record::{NumericState, WarehouseRecord};
use crate::domain::Result;
use std::io::Write;

/// Default file name of the tabular artifact
pub const DEFAULT_TABLE_FILE_NAME: &str = "warehouse-comparison.csv";

/// Header row plus one string row per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Column labels, starting with the rank column
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in collection order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Look up one cell by row index and header label
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Write the table as CSV
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Export`](crate::domain::WarehouseError::Export)
    /// if the writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(&self.headers)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Render the table as CSV bytes
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(buffer)
    }
}

/// Build the comparison table for a list of records
///
/// # Errors
///
/// Returns an error if the list is empty or contains malformed records.
///
/// # Examples
///
/// ```
/// use warehouse_compare::core::export::table::export_table;
/// use warehouse_compare::core::store::RecordStore;
///
/// # fn example() -> warehouse_compare::domain::Result<()> {
/// let mut store = RecordStore::default();
/// let id = store.records()[0].id();
/// store.update_field_raw(id, "area", "7150")?;
/// store.update_field_raw(id, "rentPerSqm", "150")?;
///
/// let table = export_table(store.records())?;
/// assert_eq!(table.cell(0, "Total Price (per month)"), Some("1,072,500"));
/// # Ok(())
/// # }
/// ```
pub fn export_table(records: &[WarehouseRecord]) -> Result<Table> {
    validate_records(records)?;

    let headers = std::iter::once(RANK_HEADER.to_string())
        .chain(COLUMNS.iter().map(|c| c.label.to_string()))
        .collect();

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            std::iter::once((index + 1).to_string())
                .chain(COLUMNS.iter().map(|column| table_cell(record, column)))
                .collect()
        })
        .collect();

    Ok(Table { headers, rows })
}

fn table_cell(record: &WarehouseRecord, column: &Column) -> String {
    match column.field {
        Field::Text(f) => record.text(f).to_string(),
        Field::Numeric(f) => {
            let input = record.numeric(f);
            match input.state() {
                NumericState::Blank => String::new(),
                NumericState::Invalid => input.raw().to_string(),
                NumericState::Valid(value) if f == NumericField::RentPerSqm => {
                    format_thousands(value)
                }
                NumericState::Valid(value) => value.to_string(),
            }
        }
        Field::Feature(f) => record.feature(f).label().to_string(),
        Field::FactoryLicense => record.factory_license().label().to_string(),
        Field::FloodRisk => record.flood_risk().label().to_string(),
        Field::TotalPrice if record.total_price().is_zero() => String::new(),
        Field::TotalPrice => format_thousands(record.total_price()),
    }
}
