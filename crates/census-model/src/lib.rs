//! Data model for census submission normalization.
//!
//! - [`raw`]: typed access to raw submission JSON.
//! - [`choice`]: choice tables mapping coded answers to labels.
//! - [`records`]: normalized record shapes, one per [`EntityKind`].

pub mod choice;
pub mod crop;
pub mod entity;
pub mod error;
pub mod form;
pub mod location;
pub mod options;
pub mod raw;
pub mod records;

pub use choice::{ChoiceRegistry, ChoiceTable};
pub use crop::CropCategory;
pub use entity::EntityKind;
pub use error::{FieldError, Result, SubmissionError};
pub use form::FormKind;
pub use location::GpsFields;
pub use options::{FailureMode, ProcessingOptions};
pub use raw::{ID_KEY, RawRecord, RawSubmission};
pub use records::{
    AnimalProductRecord, AnimalRecord, BuildingRecord, BusinessLineItemRecord, BusinessRecord,
    CropRecord, DeathRecord, HouseholdRecord, IndividualRecord, LandParcelRecord, LineItemKind,
    Record,
};
