//! Integration tests for intake files replayed through the record store

use rust_decimal_macros::dec;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use warehouse_compare::adapters::intake::{load_intake, replay_intake, IntakeEntry};
use warehouse_compare::core::export::export_table;
use warehouse_compare::core::store::RecordStore;
use warehouse_compare::domain::{FeatureField, TextField, TriState, WarehouseError};

fn write_intake(dir: &TempDir, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("intake.json");
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_replay_builds_one_record_per_entry() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("photos")).unwrap();
    fs::write(dir.path().join("photos/gate.png"), [0x89, b'P', b'N', b'G']).unwrap();

    let path = write_intake(
        &dir,
        json!([
            {
                "fields": {
                    "projectName": "Bang Na DC",
                    "area": 7150,
                    "rentPerSqm": "150",
                    "cctv": true
                },
                "photos": [
                    { "path": "photos/gate.png", "caption": "Front gate" },
                    { "url": "https://img.example.com/yard.jpg" }
                ]
            },
            { "fields": { "projectName": "Lat Krabang", "hasSprinkler": "No" } }
        ]),
    );

    let entries = load_intake(&path).unwrap();
    let mut store = RecordStore::default();
    let report = replay_intake(&mut store, &entries, dir.path());

    assert_eq!(report.records, 2);
    assert_eq!(report.fields_applied, 6);
    assert_eq!(report.photos_attached, 2);
    assert!(report.problems.is_empty());

    let first = &store.records()[0];
    assert_eq!(first.total_price(), dec!(1072500));
    assert_eq!(first.feature(FeatureField::Cctv), TriState::Yes);
    assert!(first.photos()[0].image.starts_with("data:image/png;base64,"));
    assert_eq!(first.photos()[0].caption.as_deref(), Some("Front gate"));
    assert_eq!(first.photos()[1].image, "https://img.example.com/yard.jpg");

    let second = &store.records()[1];
    assert_eq!(second.id().get(), 2);
    assert_eq!(second.text(TextField::ProjectName), "Lat Krabang");
    assert_eq!(second.feature(FeatureField::Sprinkler), TriState::No);
}

#[test]
fn test_replay_collects_problems_without_stopping() {
    let dir = TempDir::new().unwrap();
    let path = write_intake(
        &dir,
        json!([{
            "fields": {
                "area": "-10",
                "floodRisk": "Extreme",
                "totalPrice": 5,
                "location": "Chonburi"
            },
            "photos": [
                { "path": "missing.jpg" },
                { "caption": "no source" }
            ]
        }]),
    );

    let entries = load_intake(&path).unwrap();
    let mut store = RecordStore::default();
    let report = replay_intake(&mut store, &entries, dir.path());

    // area (invalid but stored) and location are applied
    assert_eq!(report.fields_applied, 2);
    assert_eq!(report.invalid_values, 1);
    assert_eq!(report.photos_attached, 0);
    assert_eq!(report.problems.len(), 5);
    assert!(report.problems.iter().all(|p| p.position == 1));

    let record = &store.records()[0];
    assert_eq!(record.text(TextField::Location), "Chonburi");
    assert!(record.total_price().is_zero());
}

#[test]
fn test_replay_respects_photo_limit() {
    let dir = TempDir::new().unwrap();
    let photos: Vec<_> = (0..5)
        .map(|i| json!({ "url": format!("https://img.example.com/{i}.jpg") }))
        .collect();
    let path = write_intake(&dir, json!([{ "photos": photos }]));

    let entries = load_intake(&path).unwrap();
    let mut store = RecordStore::new(3);
    let report = replay_intake(&mut store, &entries, dir.path());

    assert_eq!(report.photos_attached, 3);
    assert_eq!(report.photos_dropped, 2);
    assert_eq!(report.problems.len(), 1);
    assert_eq!(store.records()[0].photos().len(), 3);
}

#[test]
fn test_load_intake_rejects_bad_files() {
    let dir = TempDir::new().unwrap();

    let empty = write_intake(&dir, json!([]));
    assert!(matches!(load_intake(&empty), Err(WarehouseError::Intake(_))));

    let unknown_key = write_intake(&dir, json!([{ "feilds": {} }]));
    assert!(matches!(load_intake(&unknown_key), Err(WarehouseError::Intake(_))));

    let missing = dir.path().join("nope.json");
    assert!(matches!(load_intake(&missing), Err(WarehouseError::Intake(_))));
}

#[test]
fn test_blank_template_replays_to_blank_record() {
    let dir = TempDir::new().unwrap();
    let path = write_intake(&dir, json!([IntakeEntry::blank_template()]));

    let entries = load_intake(&path).unwrap();
    let mut store = RecordStore::default();
    let report = replay_intake(&mut store, &entries, dir.path());

    assert!(report.problems.is_empty());
    assert_eq!(report.invalid_values, 0);
    assert_eq!(store.records()[0], RecordStore::default().records()[0]);

    let table = export_table(store.records()).unwrap();
    assert_eq!(table.cell(0, "Project / Owner"), Some(""));
    assert_eq!(table.cell(0, "Total Price (per month)"), Some(""));
}
