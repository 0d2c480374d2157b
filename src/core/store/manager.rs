//! Record store for the in-memory warehouse collection
//!
//! The store owns the ordered record collection and the ID counter. All
//! operations are synchronous and validate before mutating, so a failed call
//! leaves the collection exactly as it was.

use super::snapshot::RecordSnapshot;
use crate::domain::fields::{Field, FieldUpdate};
use crate::domain::ids::RecordId;
use crate::domain::record::{Photo, WarehouseRecord};
use crate::domain::{Result, WarehouseError};

/// Default maximum number of photos per record
pub const DEFAULT_MAX_PHOTOS: usize = 15;

/// Result of a field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Field that was updated
    pub field: Field,

    /// Whether the stored value changed
    pub changed: bool,

    /// Whether the stored value failed numeric validation
    ///
    /// The value is stored regardless; this only drives the UI error state.
    pub invalid: bool,
}

/// Result of attaching photos to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoAttachOutcome {
    /// Number of photos appended
    pub accepted: usize,

    /// Number of photos dropped because the record was full
    pub dropped: usize,

    /// Photo count on the record after the call
    pub total: usize,
}

/// Ordered in-memory collection of warehouse records
///
/// The collection is never empty: a new store starts with one blank record
/// and removing the last remaining record is rejected.
///
/// # Examples
///
/// ```
/// use warehouse_compare::core::store::RecordStore;
/// use warehouse_compare::domain::FieldUpdate;
///
/// # fn example() -> warehouse_compare::domain::Result<()> {
/// let mut store = RecordStore::default();
/// let id = store.records()[0].id();
///
/// store.update_field(id, FieldUpdate::parse("area", "7150")?)?;
/// store.update_field(id, FieldUpdate::parse("rentPerSqm", "150")?)?;
///
/// assert_eq!(store.get(id).unwrap().total_price().to_string(), "1072500");
/// assert!(store.remove_record(id).is_err()); // last record stays
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<WarehouseRecord>,
    next_id: RecordId,
    max_photos: usize,
}

impl RecordStore {
    /// Create a store holding a single blank record
    ///
    /// # Arguments
    ///
    /// * `max_photos` - Maximum number of photos a record may hold
    pub fn new(max_photos: usize) -> Self {
        let mut store = Self {
            records: Vec::new(),
            next_id: RecordId::first(),
            max_photos,
        };
        store.create_record();
        store
    }

    /// Maximum number of photos a record may hold
    pub fn max_photos(&self) -> usize {
        self.max_photos
    }

    /// Append a blank record with a fresh ID
    pub fn create_record(&mut self) -> &WarehouseRecord {
        let id = self.next_id;
        self.next_id = id.next();
        self.records.push(WarehouseRecord::new(id));

        tracing::debug!(record_id = %id, count = self.records.len(), "Record created");

        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Look up a record by ID
    pub fn get(&self, id: RecordId) -> Option<&WarehouseRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Records in collection order
    pub fn records(&self) -> &[WarehouseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One-based position of a record, as shown in exports ("Option #N")
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.index_of(id).ok().map(|i| i + 1)
    }

    fn index_of(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(WarehouseError::RecordNotFound(id))
    }

    fn record_mut(&mut self, id: RecordId) -> Result<&mut WarehouseRecord> {
        let index = self.index_of(id)?;
        Ok(&mut self.records[index])
    }

    /// Apply a typed field update
    ///
    /// Updating `area` or `rentPerSqm` recomputes the total price before the
    /// call returns. Numeric values that are not positive numbers are stored
    /// anyway and reported through [`UpdateOutcome::invalid`].
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::RecordNotFound`] if no record has this ID.
    pub fn update_field(&mut self, id: RecordId, update: FieldUpdate) -> Result<UpdateOutcome> {
        let record = self.record_mut(id)?;
        let changed = record.apply(&update);

        let invalid = match &update {
            FieldUpdate::Numeric(field, _) => record.numeric(*field).is_invalid(),
            _ => false,
        };
        let field = update.field();

        if invalid {
            tracing::warn!(
                record_id = %id,
                field = %field,
                "Value must be a number greater than 0"
            );
        } else {
            tracing::debug!(record_id = %id, field = %field, changed, "Field updated");
        }

        Ok(UpdateOutcome {
            field,
            changed,
            invalid,
        })
    }

    /// Apply an untyped `(fieldName, rawValue)` input event
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or derived, a categorical
    /// value is not a valid option, or the record does not exist. The record
    /// is not modified in any of these cases.
    pub fn update_field_raw(
        &mut self,
        id: RecordId,
        field_name: &str,
        raw: &str,
    ) -> Result<UpdateOutcome> {
        let update = FieldUpdate::parse(field_name, raw)?;
        self.update_field(id, update)
    }

    /// Append photos to a record, truncating at the configured maximum
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::RecordNotFound`] if no record has this ID.
    pub fn attach_photos(
        &mut self,
        id: RecordId,
        photos: impl IntoIterator<Item = Photo>,
    ) -> Result<PhotoAttachOutcome> {
        let max_photos = self.max_photos;
        let record = self.record_mut(id)?;
        let stored = record.photos_mut();

        let room = max_photos.saturating_sub(stored.len());
        let mut accepted = 0;
        let mut dropped = 0;
        for photo in photos {
            if accepted < room {
                stored.push(photo);
                accepted += 1;
            } else {
                dropped += 1;
            }
        }

        let total = stored.len();
        if dropped > 0 {
            tracing::warn!(
                record_id = %id,
                dropped,
                max_photos,
                "Photo limit reached, extra photos were not attached"
            );
        }

        Ok(PhotoAttachOutcome {
            accepted,
            dropped,
            total,
        })
    }

    /// Set or clear the caption of one photo
    ///
    /// # Errors
    ///
    /// Returns an error if the record or photo does not exist.
    pub fn set_photo_caption(
        &mut self,
        id: RecordId,
        index: usize,
        caption: impl Into<String>,
    ) -> Result<()> {
        let record = self.record_mut(id)?;
        let photo = record
            .photos_mut()
            .get_mut(index)
            .ok_or(WarehouseError::PhotoNotFound { record: id, index })?;
        photo.set_caption(caption);
        Ok(())
    }

    /// Remove one photo and return it
    ///
    /// # Errors
    ///
    /// Returns an error if the record or photo does not exist.
    pub fn remove_photo(&mut self, id: RecordId, index: usize) -> Result<Photo> {
        let record = self.record_mut(id)?;
        let photos = record.photos_mut();
        if index >= photos.len() {
            return Err(WarehouseError::PhotoNotFound { record: id, index });
        }
        Ok(photos.remove(index))
    }

    /// Remove a record and return it
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::RecordNotFound`] if no record has this ID and
    /// [`WarehouseError::LastRecord`] if it is the only record left. The
    /// collection is unchanged in both cases.
    pub fn remove_record(&mut self, id: RecordId) -> Result<WarehouseRecord> {
        let index = self.index_of(id)?;
        if self.records.len() == 1 {
            tracing::warn!(record_id = %id, "Refusing to remove the last record");
            return Err(WarehouseError::LastRecord(id));
        }

        let removed = self.records.remove(index);
        tracing::debug!(record_id = %id, count = self.records.len(), "Record removed");
        Ok(removed)
    }

    /// Immutable copy of the current collection for exporters
    pub fn snapshot(&self) -> RecordSnapshot {
        RecordSnapshot::new(self.records.clone())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PHOTOS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::{NumericField, TextField};
    use crate::domain::options::TriState;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn first_id(store: &RecordStore) -> RecordId {
        store.records()[0].id()
    }

    #[test]
    fn test_new_store_has_one_blank_record() {
        let store = RecordStore::default();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.records()[0], WarehouseRecord::new(first_id(&store)));
    }

    #[test]
    fn test_create_record_ids_are_unique() {
        let mut store = RecordStore::default();
        for _ in 0..20 {
            store.create_record();
        }
        let ids: HashSet<RecordId> = store.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_ids_never_reused_after_removal() {
        let mut store = RecordStore::default();
        let second = store.create_record().id();
        store.remove_record(second).unwrap();
        let third = store.create_record().id();
        assert_ne!(second, third);
        assert!(third > second);
    }

    #[test]
    fn test_update_recomputes_total_price() {
        let mut store = RecordStore::default();
        let id = first_id(&store);

        store.update_field_raw(id, "area", "7150").unwrap();
        assert_eq!(store.get(id).unwrap().total_price(), dec!(0));

        store.update_field_raw(id, "rentPerSqm", "150").unwrap();
        assert_eq!(store.get(id).unwrap().total_price(), dec!(1072500));
    }

    #[test]
    fn test_update_missing_record() {
        let mut store = RecordStore::default();
        let missing = RecordId::new(99).unwrap();
        let err = store.update_field_raw(missing, "location", "x").unwrap_err();
        assert!(matches!(err, WarehouseError::RecordNotFound(id) if id == missing));
    }

    #[test]
    fn test_invalid_numeric_is_stored_and_flagged() {
        let mut store = RecordStore::default();
        let id = first_id(&store);

        let outcome = store.update_field_raw(id, "area", "-5").unwrap();
        assert!(outcome.invalid);
        assert!(outcome.changed);
        assert_eq!(store.get(id).unwrap().numeric(NumericField::Area).raw(), "-5");

        let outcome = store.update_field_raw(id, "area", "").unwrap();
        assert!(!outcome.invalid);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut store = RecordStore::default();
        let id = first_id(&store);
        let update = FieldUpdate::Text(TextField::ProjectName, "Bang Na DC".to_string());

        assert!(store.update_field(id, update.clone()).unwrap().changed);
        let before = store.get(id).unwrap().clone();
        assert!(!store.update_field(id, update).unwrap().changed);
        assert_eq!(store.get(id).unwrap(), &before);
    }

    #[test]
    fn test_bad_categorical_leaves_record_untouched() {
        let mut store = RecordStore::default();
        let id = first_id(&store);
        let before = store.get(id).unwrap().clone();

        assert!(store.update_field_raw(id, "cctv", "sometimes").is_err());
        assert!(store.update_field_raw(id, "totalPrice", "5").is_err());
        assert_eq!(store.get(id).unwrap(), &before);

        store.update_field_raw(id, "cctv", "Yes").unwrap();
        assert_eq!(
            store.get(id).unwrap().feature(crate::domain::FeatureField::Cctv),
            TriState::Yes
        );
    }

    #[test]
    fn test_remove_last_record_rejected() {
        let mut store = RecordStore::default();
        let id = first_id(&store);
        let err = store.remove_record(id).unwrap_err();
        assert!(matches!(err, WarehouseError::LastRecord(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_record_is_noop() {
        let mut store = RecordStore::default();
        store.create_record();
        let err = store.remove_record(RecordId::new(42).unwrap()).unwrap_err();
        assert!(matches!(err, WarehouseError::RecordNotFound(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut store = RecordStore::default();
        let a = first_id(&store);
        let b = store.create_record().id();
        let c = store.create_record().id();

        store.remove_record(b).unwrap();
        let ids: Vec<RecordId> = store.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(store.position(c), Some(2));
    }

    #[test]
    fn test_attach_photos_truncates_at_max() {
        let mut store = RecordStore::new(10);
        let id = first_id(&store);

        let outcome = store
            .attach_photos(id, (0..8).map(|i| Photo::new(format!("{i}.jpg"))))
            .unwrap();
        assert_eq!(outcome.accepted, 8);
        assert_eq!(outcome.dropped, 0);

        let outcome = store
            .attach_photos(id, (0..5).map(|i| Photo::new(format!("extra-{i}.jpg"))))
            .unwrap();
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.dropped, 3);
        assert_eq!(outcome.total, 10);
        assert_eq!(store.get(id).unwrap().photos().len(), 10);
        assert_eq!(store.get(id).unwrap().photos()[9].image, "extra-1.jpg");
    }

    #[test]
    fn test_photo_caption_and_removal() {
        let mut store = RecordStore::default();
        let id = first_id(&store);
        store
            .attach_photos(id, vec![Photo::new("a.jpg"), Photo::new("b.jpg")])
            .unwrap();

        store.set_photo_caption(id, 1, "Dock doors").unwrap();
        assert_eq!(
            store.get(id).unwrap().photos()[1].caption.as_deref(),
            Some("Dock doors")
        );

        let removed = store.remove_photo(id, 0).unwrap();
        assert_eq!(removed.image, "a.jpg");
        assert_eq!(store.get(id).unwrap().photos().len(), 1);

        assert!(matches!(
            store.remove_photo(id, 5),
            Err(WarehouseError::PhotoNotFound { index: 5, .. })
        ));
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_edits() {
        let mut store = RecordStore::default();
        let id = first_id(&store);
        store.update_field_raw(id, "projectName", "Before").unwrap();

        let snapshot = store.snapshot();
        store.update_field_raw(id, "projectName", "After").unwrap();
        store.create_record();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.records()[0].project_name(), "Before");
    }
}
