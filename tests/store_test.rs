//! Integration tests for the record store
//!
//! These exercise the store through its public API the way a form session
//! would: a sequence of field edits, photo edits and record removals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use warehouse_compare::core::store::{RecordStore, DEFAULT_MAX_PHOTOS};
use warehouse_compare::domain::{
    FeatureField, FloodRisk, NumericField, NumericState, Photo, TextField, TriState,
    WarehouseError, MAX_NUMERIC_INPUT,
};

fn photo(n: usize) -> Photo {
    Photo::new(format!("https://img.example.com/{n}.jpg"))
}

#[test]
fn test_new_store_holds_one_blank_record() {
    let store = RecordStore::default();
    assert_eq!(store.len(), 1);
    assert_eq!(store.max_photos(), DEFAULT_MAX_PHOTOS);

    let record = &store.records()[0];
    assert_eq!(record.id().get(), 1);
    assert_eq!(record.project_name(), "");
    assert_eq!(record.total_price(), Decimal::ZERO);
    assert_eq!(record.flood_risk(), FloodRisk::NoData);
    assert_eq!(record.feature(FeatureField::Cctv), TriState::Unspecified);
    assert!(record.photos().is_empty());
}

#[test]
fn test_total_price_follows_area_and_rate() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();

    store.update_field_raw(id, "area", "7150").unwrap();
    assert_eq!(store.get(id).unwrap().total_price(), Decimal::ZERO);

    store.update_field_raw(id, "rentPerSqm", "150").unwrap();
    assert_eq!(store.get(id).unwrap().total_price(), dec!(1072500));

    store.update_field_raw(id, "area", "1000.5").unwrap();
    assert_eq!(store.get(id).unwrap().total_price(), dec!(150075.0));

    // Unrelated fields leave the total alone
    store.update_field_raw(id, "height", "12").unwrap();
    assert_eq!(store.get(id).unwrap().total_price(), dec!(150075.0));
}

#[test]
fn test_invalid_number_is_kept_and_zeroes_total() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.update_field_raw(id, "area", "7150").unwrap();
    store.update_field_raw(id, "rentPerSqm", "150").unwrap();

    let outcome = store.update_field_raw(id, "rentPerSqm", "-5").unwrap();
    assert!(outcome.invalid);
    assert!(outcome.changed);

    let record = store.get(id).unwrap();
    assert_eq!(record.numeric(NumericField::RentPerSqm).raw(), "-5");
    assert_eq!(
        record.numeric(NumericField::RentPerSqm).state(),
        NumericState::Invalid
    );
    assert_eq!(record.total_price(), Decimal::ZERO);
}

#[test]
fn test_oversized_number_is_flagged_invalid() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();

    let area = store.update_field_raw(id, "area", "1000000000000000").unwrap();
    let rate = store.update_field_raw(id, "rentPerSqm", "100000000000000").unwrap();
    assert!(area.invalid);
    assert!(!rate.invalid);
    assert_eq!(store.get(id).unwrap().total_price(), Decimal::ZERO);

    let area = store.update_field_raw(id, "area", "100000000000000").unwrap();
    assert!(!area.invalid);
    assert_eq!(
        store.get(id).unwrap().total_price(),
        Decimal::from(MAX_NUMERIC_INPUT) * Decimal::from(MAX_NUMERIC_INPUT)
    );
}

#[test]
fn test_digit_separators_are_invalid() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.update_field_raw(id, "rentPerSqm", "150").unwrap();

    let outcome = store.update_field_raw(id, "area", "7_150").unwrap();
    assert!(outcome.invalid);
    assert_eq!(store.get(id).unwrap().total_price(), Decimal::ZERO);
}

#[test]
fn test_clearing_a_number_is_not_invalid() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.update_field_raw(id, "loadingBays", "4").unwrap();

    let outcome = store.update_field_raw(id, "loadingBays", "").unwrap();
    assert!(!outcome.invalid);
    assert!(store.get(id).unwrap().numeric(NumericField::LoadingBays).is_blank());
}

#[test]
fn test_rejected_updates_leave_record_untouched() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.update_field_raw(id, "floodRisk", "Low").unwrap();
    let before = store.get(id).unwrap().clone();

    assert!(matches!(
        store.update_field_raw(id, "totalPrice", "99"),
        Err(WarehouseError::DerivedField(_))
    ));
    assert!(matches!(
        store.update_field_raw(id, "roofColour", "red"),
        Err(WarehouseError::UnknownField(_))
    ));
    assert!(matches!(
        store.update_field_raw(id, "floodRisk", "Extreme"),
        Err(WarehouseError::InvalidValue { .. })
    ));

    assert_eq!(store.get(id).unwrap(), &before);
}

#[test]
fn test_ids_are_never_reused() {
    let mut store = RecordStore::default();
    let second = store.create_record().id();
    let third = store.create_record().id();
    assert_eq!((second.get(), third.get()), (2, 3));

    store.remove_record(third).unwrap();
    let fourth = store.create_record().id();
    assert_eq!(fourth.get(), 4);
    assert_eq!(store.position(fourth), Some(3));
}

#[test]
fn test_removing_last_record_is_refused() {
    let mut store = RecordStore::default();
    let first = store.records()[0].id();
    let second = store.create_record().id();

    store.remove_record(first).unwrap();
    assert_eq!(store.len(), 1);

    let err = store.remove_record(second).unwrap_err();
    assert!(matches!(err, WarehouseError::LastRecord(id) if id == second));
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id(), second);
}

#[test]
fn test_removing_unknown_record_changes_nothing() {
    let mut store = RecordStore::default();
    store.create_record();
    let gone = store.create_record().id();
    store.remove_record(gone).unwrap();

    let err = store.remove_record(gone).unwrap_err();
    assert!(matches!(err, WarehouseError::RecordNotFound(_)));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_photos_are_capped() {
    let mut store = RecordStore::new(3);
    let id = store.records()[0].id();

    let outcome = store.attach_photos(id, (0..2).map(photo)).unwrap();
    assert_eq!((outcome.accepted, outcome.dropped, outcome.total), (2, 0, 2));

    let outcome = store.attach_photos(id, (2..6).map(photo)).unwrap();
    assert_eq!((outcome.accepted, outcome.dropped, outcome.total), (1, 3, 3));

    let images: Vec<_> = store.get(id).unwrap().photos().iter().map(|p| p.image.as_str()).collect();
    assert_eq!(
        images,
        [
            "https://img.example.com/0.jpg",
            "https://img.example.com/1.jpg",
            "https://img.example.com/2.jpg",
        ]
    );
}

#[test]
fn test_photo_caption_and_removal() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.attach_photos(id, (0..3).map(photo)).unwrap();

    store.set_photo_caption(id, 1, "Loading dock").unwrap();
    assert_eq!(
        store.get(id).unwrap().photos()[1].caption.as_deref(),
        Some("Loading dock")
    );

    let removed = store.remove_photo(id, 0).unwrap();
    assert_eq!(removed.image, "https://img.example.com/0.jpg");
    assert_eq!(
        store.get(id).unwrap().photos()[0].caption.as_deref(),
        Some("Loading dock")
    );

    assert!(matches!(
        store.remove_photo(id, 5),
        Err(WarehouseError::PhotoNotFound { index: 5, .. })
    ));
}

#[test]
fn test_snapshot_is_isolated_from_later_edits() {
    let mut store = RecordStore::default();
    let id = store.records()[0].id();
    store.update_field_raw(id, "projectName", "Bang Na DC").unwrap();

    let snapshot = store.snapshot();
    store.update_field_raw(id, "projectName", "Renamed").unwrap();
    store.create_record();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.records()[0].text(TextField::ProjectName), "Bang Na DC");
    assert_eq!(store.len(), 2);
}
