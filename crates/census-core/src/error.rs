use census_model::{EntityKind, FieldError, FormKind};
use census_store::StoreError;
use thiserror::Error;

use crate::report::ElementFailure;

/// Failure to build one record from its raw object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The matched health, fertility or education answer is malformed.
    #[error("matched {group} answer: {source}")]
    Sibling {
        group: &'static str,
        #[source]
        source: FieldError,
    },
}

/// Failure of a whole submission run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{form} submission {submission_id}: cannot extract {entity} record: {source}")]
    Base {
        form: FormKind,
        submission_id: String,
        entity: EntityKind,
        #[source]
        source: ExtractError,
    },

    #[error("{form} submission {submission_id}: cannot write base record")]
    BaseWrite {
        form: FormKind,
        submission_id: String,
        #[source]
        source: StoreError,
    },

    /// Strict mode: at least one element failed, nothing was written.
    #[error("{form} submission {submission_id}: {} element(s) failed, nothing written", failures.len())]
    Strict {
        form: FormKind,
        submission_id: String,
        failures: Vec<ElementFailure>,
    },

    /// Strict mode: the atomic batch write failed.
    #[error("{form} submission {submission_id}: batch write failed")]
    BatchWrite {
        form: FormKind,
        submission_id: String,
        #[source]
        source: StoreError,
    },
}
