//! Intake file models
//!
//! An intake file is a JSON array with one entry per record:
//!
//! ```json
//! [
//!   {
//!     "fields": { "projectName": "Bang Na DC", "area": 7150, "rentPerSqm": "150" },
//!     "photos": [{ "path": "photos/gate.jpg", "caption": "Front gate" }]
//!   }
//! ]
//! ```
//!
//! Field values may be strings, numbers, booleans or null; they are turned
//! into the raw text a user would have typed before reaching the store.

use crate::domain::fields::{FeatureField, Field, NumericField, TextField};
use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// One record's worth of input events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeEntry {
    /// Field name to value
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,

    /// Photos to attach, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<IntakePhoto>,
}

/// A photo reference: a local file or a URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakePhoto {
    /// Local image file, relative to the intake file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Remote or `data:` URL used as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl IntakeEntry {
    /// An entry listing every settable field with an empty value
    pub fn blank_template() -> Self {
        let fields = TextField::iter()
            .map(Field::Text)
            .chain(NumericField::iter().map(Field::Numeric))
            .chain(FeatureField::iter().map(Field::Feature))
            .chain([Field::FactoryLicense, Field::FloodRisk])
            .map(|field| (field.name().to_string(), Value::String(String::new())))
            .collect();

        Self {
            fields,
            photos: Vec::new(),
        }
    }
}

/// Convert a JSON value to the text a form input would hold
pub fn raw_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Plain decimal text for a JSON number; exponent forms are expanded
fn number_text(n: &Number) -> String {
    let text = n.to_string();
    if !text.contains(['e', 'E']) {
        return text;
    }
    Decimal::from_scientific(&text)
        .map(|d| d.normalize().to_string())
        .unwrap_or(text)
}
