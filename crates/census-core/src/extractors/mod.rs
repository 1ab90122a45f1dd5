//! Entity extractors.
//!
//! Each extractor maps one raw object, plus what it inherits from its
//! parent, to one normalized record. Extractors are pure: the same input
//! and choice release always give the same record.
//!
//! # Forms
//!
//! | Form | Base record | Repeating groups |
//! |------|-------------|------------------|
//! | household | [`HouseholdRecord`](census_model::HouseholdRecord) | individuals, land parcels, 7 crop groups, animals, animal products, deaths |
//! | business | [`BusinessRecord`](census_model::BusinessRecord) | 7 crop groups, animals, animal products (as line items) |
//! | building | [`BuildingRecord`](census_model::BuildingRecord) | - |
//!
//! Form extractors return an [`ExtractedBase`]: the base record plus the
//! [`ElementGroup`]s still to be processed. The pipeline drives the groups
//! so that element failures stay isolated.

pub mod animal;
pub mod building;
pub mod business;
pub mod crop;
pub mod death;
pub mod household;
pub mod individual;
pub mod land;
pub mod siblings;

use census_model::{EntityKind, FieldError, FormKind, RawRecord, RawSubmission, Record};
use serde_json::Value;

use crate::context::PipelineContext;
use crate::error::ExtractError;

/// What a child record inherits from its base record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRef<'a> {
    pub id: &'a str,
    pub ward_no: Option<i64>,
}

/// Builds the record for one element of a group.
pub type ElementExtractor<'a> = Box<dyn Fn(RawRecord<'_>) -> Result<Record, ExtractError> + 'a>;

/// One repeating group of a submission, ready to be extracted.
pub struct ElementGroup<'a> {
    pub entity: EntityKind,
    /// Dotted raw path, used in logs and failure reports.
    pub group: String,
    /// Elements, or the error when the group itself is malformed.
    pub elements: Result<&'a [Value], FieldError>,
    pub extract: ElementExtractor<'a>,
}

impl<'a> ElementGroup<'a> {
    pub fn new(
        entity: EntityKind,
        group: impl Into<String>,
        elements: Result<&'a [Value], FieldError>,
        extract: ElementExtractor<'a>,
    ) -> Self {
        Self {
            entity,
            group: group.into(),
            elements,
            extract,
        }
    }
}

/// Base record of a submission and its pending groups.
pub struct ExtractedBase<'a> {
    pub record: Record,
    pub groups: Vec<ElementGroup<'a>>,
}

/// Extract the base record of `submission` and plan its groups.
pub fn extract_submission<'a>(
    form: FormKind,
    submission: &'a RawSubmission,
    ctx: &'a PipelineContext,
) -> Result<ExtractedBase<'a>, ExtractError> {
    let raw = submission.record();
    match form {
        FormKind::Household => household::extract(raw, ctx),
        FormKind::Business => business::extract(raw, ctx),
        FormKind::Building => building::extract(raw, ctx),
    }
}

/// Elements of the array `key` inside the sub-form `section`.
///
/// A missing sub-form or array gives no elements.
pub(crate) fn nested_array<'a>(
    raw: RawRecord<'a>,
    section: &str,
    key: &str,
) -> Result<&'a [Value], FieldError> {
    raw.section(section)?.array(key)
}

/// `__system.submissionDate`, normalized.
pub(crate) fn submission_date(raw: RawRecord<'_>) -> Result<Option<String>, FieldError> {
    Ok(raw
        .section("__system")?
        .text("submissionDate")?
        .map(|date| census_transform::normalize_date(&date)))
}
