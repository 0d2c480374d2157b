//! Record store
//!
//! This module provides the in-memory record collection:
//! - Record creation with unique, never-reused IDs
//! - Typed field updates with the derived total price kept current
//! - Photo attachment capped at a configurable maximum
//! - Immutable snapshots for the exporters

pub mod manager;
pub mod snapshot;

pub use manager::{PhotoAttachOutcome, RecordStore, UpdateOutcome, DEFAULT_MAX_PHOTOS};
pub use snapshot::RecordSnapshot;
