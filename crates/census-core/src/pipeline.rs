//! Persistence orchestration for one submission.
//!
//! The base record is written first; a failure there aborts the run. Each
//! element of each repeating group is then extracted and written on its
//! own, so one malformed element only drops itself. In
//! [`FailureMode::Strict`] nothing is written unless every element
//! extracts cleanly, and the whole submission goes through one atomic
//! [`RecordStore::upsert_all`].

use census_model::{FailureMode, FormKind, ID_KEY, RawRecord, RawSubmission, Record};
use census_store::RecordStore;
use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use crate::context::PipelineContext;
use crate::error::{ExtractError, PipelineError};
use crate::extractors::{ElementGroup, extract_submission};
use crate::report::{ElementFailure, SubmissionReport, error_chain};

/// Processes submissions against a fixed choice release and options.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    ctx: PipelineContext,
}

impl Pipeline {
    pub fn new(ctx: PipelineContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &PipelineContext {
        &self.ctx
    }

    /// Normalize `submission` as a `form` submission and write it to
    /// `store`.
    ///
    /// Records are upserted by id, so processing the same submission twice
    /// leaves the store unchanged.
    pub fn process<S>(
        &self,
        form: FormKind,
        submission: &RawSubmission,
        store: &mut S,
    ) -> Result<SubmissionReport, PipelineError>
    where
        S: RecordStore + ?Sized,
    {
        let submission_id = submission.id();
        let span = info_span!("submission", form = %form, submission_id = %submission_id);
        let _guard = span.enter();

        let base = extract_submission(form, submission, &self.ctx).map_err(|source| {
            PipelineError::Base {
                form,
                submission_id: submission_id.to_string(),
                entity: form.base_entity(),
                source,
            }
        })?;

        let report = match self.ctx.options.failure_mode {
            FailureMode::Partial => {
                write_partial(form, submission_id, base.record, &base.groups, store)?
            }
            FailureMode::Strict => {
                write_strict(form, submission_id, base.record, &base.groups, store)?
            }
        };
        info!(
            written = report.total_written(),
            failures = report.failures.len(),
            "submission processed"
        );
        Ok(report)
    }
}

fn write_partial<S>(
    form: FormKind,
    submission_id: &str,
    base: Record,
    groups: &[ElementGroup<'_>],
    store: &mut S,
) -> Result<SubmissionReport, PipelineError>
where
    S: RecordStore + ?Sized,
{
    let mut report = SubmissionReport::new(form, submission_id);
    store
        .upsert(&base)
        .map_err(|source| PipelineError::BaseWrite {
            form,
            submission_id: submission_id.to_string(),
            source,
        })?;
    report.record_written(base.kind());

    for group in groups {
        let extracted = extract_group(group, &mut report.failures);
        for (index, record) in extracted {
            match store.upsert(&record) {
                Ok(()) => report.record_written(record.kind()),
                Err(error) => {
                    let failure = ElementFailure {
                        entity: group.entity,
                        group: group.group.clone(),
                        index: Some(index),
                        record_id: Some(record.id().to_string()),
                        error: error_chain(&error),
                    };
                    log_failure(&failure);
                    report.failures.push(failure);
                }
            }
        }
    }
    Ok(report)
}

fn write_strict<S>(
    form: FormKind,
    submission_id: &str,
    base: Record,
    groups: &[ElementGroup<'_>],
    store: &mut S,
) -> Result<SubmissionReport, PipelineError>
where
    S: RecordStore + ?Sized,
{
    let mut failures = Vec::new();
    let mut records = vec![base];
    for group in groups {
        records.extend(
            extract_group(group, &mut failures)
                .into_iter()
                .map(|(_, record)| record),
        );
    }
    if !failures.is_empty() {
        return Err(PipelineError::Strict {
            form,
            submission_id: submission_id.to_string(),
            failures,
        });
    }

    store
        .upsert_all(&records)
        .map_err(|source| PipelineError::BatchWrite {
            form,
            submission_id: submission_id.to_string(),
            source,
        })?;
    let mut report = SubmissionReport::new(form, submission_id);
    for record in &records {
        report.record_written(record.kind());
    }
    Ok(report)
}

/// Extract every element of `group`, pushing failures as they occur.
/// Returns the extracted records with their element index.
fn extract_group(
    group: &ElementGroup<'_>,
    failures: &mut Vec<ElementFailure>,
) -> Vec<(usize, Record)> {
    let elements = match &group.elements {
        Ok(elements) => *elements,
        Err(error) => {
            let failure = ElementFailure {
                entity: group.entity,
                group: group.group.clone(),
                index: None,
                record_id: None,
                error: error.to_string(),
            };
            log_failure(&failure);
            failures.push(failure);
            return Vec::new();
        }
    };
    if elements.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let extracted = RawRecord::from_value(element, &group.group)
            .map_err(ExtractError::from)
            .and_then(|raw| (group.extract)(raw));
        match extracted {
            Ok(record) => records.push((index, record)),
            Err(error) => {
                let failure = ElementFailure {
                    entity: group.entity,
                    group: group.group.clone(),
                    index: Some(index),
                    record_id: element_id(element),
                    error: error.to_string(),
                };
                log_failure(&failure);
                failures.push(failure);
            }
        }
    }
    debug!(
        entity = %group.entity,
        group = %group.group,
        elements = elements.len(),
        extracted = records.len(),
        "group extracted"
    );
    records
}

fn element_id(element: &Value) -> Option<String> {
    element.get(ID_KEY)?.as_str().map(str::to_string)
}

fn log_failure(failure: &ElementFailure) {
    warn!(
        entity = %failure.entity,
        record_id = failure.record_id.as_deref().unwrap_or("-"),
        group = %failure.group,
        index = ?failure.index,
        error = %failure.error,
        "element skipped"
    );
}
