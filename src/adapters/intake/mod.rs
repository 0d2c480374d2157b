//! JSON intake files
//!
//! Intake files stand in for the interactive form: each entry is a batch of
//! `(fieldName, rawValue)` input events and photo attachments for one
//! record, replayed through the [`RecordStore`](crate::core::store::RecordStore).

pub mod loader;
pub mod models;

pub use loader::{load_intake, load_photo, replay_intake, IntakeProblem, IntakeProblemKind, IntakeReport};
pub use models::{IntakeEntry, IntakePhoto};
