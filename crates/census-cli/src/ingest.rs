//! Batch ingestion of submission files into a record store.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use census_core::{Pipeline, PipelineContext, error_chain};
use census_model::{FormKind, ProcessingOptions};
use census_standards::load_choices;
use census_store::{MemoryStore, RecordStore, SqliteStore};
use tracing::{debug, error, info, info_span};

use crate::input::{collect_input_files, read_submissions};
use crate::types::{DroppedElement, FailedSubmission, IngestResult, StoreTarget};

#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub form: FormKind,
    pub inputs: Vec<PathBuf>,
    pub target: StoreTarget,
    pub strict: bool,
    /// Standards root holding `choices/<version>/`.
    pub standards_root: PathBuf,
    pub choices_version: String,
}

/// Load the choice release and open the store named by `config`, then
/// ingest every input.
pub fn run_ingest(config: &IngestConfig) -> Result<IngestResult> {
    let (choices, summary) = load_choices(&config.standards_root, &config.choices_version)
        .with_context(|| {
            format!(
                "load choice tables {} from {}",
                config.choices_version,
                config.standards_root.display()
            )
        })?;
    debug!(
        version = %summary.version,
        tables = summary.table_count,
        entries = summary.entry_count,
        "choice tables loaded"
    );
    let options = if config.strict {
        ProcessingOptions::strict()
    } else {
        ProcessingOptions::default()
    };
    let pipeline = Pipeline::new(PipelineContext::new(choices).with_options(options));

    let mut store: Box<dyn RecordStore> = match &config.target {
        StoreTarget::DryRun => Box::new(MemoryStore::new()),
        StoreTarget::Sqlite(path) => Box::new(
            SqliteStore::open(path).with_context(|| format!("open {}", path.display()))?,
        ),
    };
    ingest_into(&pipeline, config, store.as_mut())
}

/// Ingest every input of `config` into `store` with `pipeline`.
///
/// A submission that fails fatally is recorded and the batch continues.
pub fn ingest_into(
    pipeline: &Pipeline,
    config: &IngestConfig,
    store: &mut dyn RecordStore,
) -> Result<IngestResult> {
    let span = info_span!("ingest", form = %config.form);
    let _guard = span.enter();
    let started = Instant::now();

    let files = collect_input_files(&config.inputs)?;
    let mut result = IngestResult::new(
        config.form,
        config.target.clone(),
        pipeline.context().choices.version.clone(),
    );
    result.files = files.len();

    for file in &files {
        let submissions = match read_submissions(file) {
            Ok(submissions) => submissions,
            Err(error) => {
                error!(file = %file.display(), error = %format!("{error:#}"), "input file skipped");
                result.failed.push(FailedSubmission {
                    location: file.display().to_string(),
                    submission_id: None,
                    error: format!("{error:#}"),
                });
                continue;
            }
        };
        info!(file = %file.display(), submissions = submissions.len(), "reading input");

        for sourced in submissions {
            result.submissions += 1;
            let location = sourced.location();
            let submission = match sourced.submission {
                Ok(submission) => submission,
                Err(error) => {
                    error!(location = %location, %error, "submission unreadable");
                    result.failed.push(FailedSubmission {
                        location,
                        submission_id: None,
                        error: error.to_string(),
                    });
                    continue;
                }
            };
            match pipeline.process(config.form, &submission, &mut *store) {
                Ok(report) => {
                    for (kind, count) in &report.written {
                        *result.written.entry(*kind).or_insert(0) += count;
                    }
                    result
                        .dropped
                        .extend(report.failures.into_iter().map(|failure| DroppedElement {
                            submission_id: report.submission_id.clone(),
                            failure,
                        }));
                }
                Err(error) => {
                    let message = error_chain(&error);
                    error!(location = %location, error = %message, "submission failed");
                    result.failed.push(FailedSubmission {
                        location,
                        submission_id: Some(submission.id().to_string()),
                        error: message,
                    });
                }
            }
        }
    }

    info!(
        files = result.files,
        submissions = result.submissions,
        written = result.total_written(),
        dropped = result.dropped.len(),
        failed = result.failed.len(),
        duration_ms = started.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(result)
}
