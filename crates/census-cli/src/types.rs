use std::collections::BTreeMap;
use std::path::PathBuf;

use census_core::ElementFailure;
use census_model::{EntityKind, FormKind};

/// Where ingested records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// In-memory store, discarded at exit.
    DryRun,
    Sqlite(PathBuf),
}

/// Outcome of one `ingest` run.
#[derive(Debug)]
pub struct IngestResult {
    pub form: FormKind,
    pub target: StoreTarget,
    pub choices_version: String,
    pub files: usize,
    pub submissions: usize,
    /// Records written per entity kind, over all submissions.
    pub written: BTreeMap<EntityKind, usize>,
    /// Elements dropped from otherwise processed submissions.
    pub dropped: Vec<DroppedElement>,
    /// Submissions (or files) that could not be processed at all.
    pub failed: Vec<FailedSubmission>,
}

impl IngestResult {
    pub fn new(form: FormKind, target: StoreTarget, choices_version: impl Into<String>) -> Self {
        Self {
            form,
            target,
            choices_version: choices_version.into(),
            files: 0,
            submissions: 0,
            written: BTreeMap::new(),
            dropped: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn total_written(&self) -> usize {
        self.written.values().sum()
    }

    /// True when any submission failed or any element was dropped.
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty() || !self.dropped.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DroppedElement {
    pub submission_id: String,
    pub failure: ElementFailure,
}

#[derive(Debug, Clone)]
pub struct FailedSubmission {
    /// `file:position`, or the file alone when it could not be read.
    pub location: String,
    pub submission_id: Option<String>,
    pub error: String,
}
