//! Per-submission outcome reporting.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use census_model::{EntityKind, FormKind};
use serde::Serialize;

/// A repeating-group element that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementFailure {
    pub entity: EntityKind,
    /// Raw path of the repeating group (e.g., "agriculture.agricultural_land").
    pub group: String,
    /// Element position; `None` when the group itself was unreadable.
    pub index: Option<usize>,
    /// `__id` of the element, when readable.
    pub record_id: Option<String>,
    pub error: String,
}

impl fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity, self.group)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        if let Some(id) = &self.record_id {
            write!(f, " ({id})")?;
        }
        write!(f, ": {}", self.error)
    }
}

/// What one pipeline run wrote and skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub form: FormKind,
    pub submission_id: String,
    pub written: BTreeMap<EntityKind, usize>,
    pub failures: Vec<ElementFailure>,
}

impl SubmissionReport {
    pub fn new(form: FormKind, submission_id: impl Into<String>) -> Self {
        Self {
            form,
            submission_id: submission_id.into(),
            written: BTreeMap::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_written(&mut self, kind: EntityKind) {
        *self.written.entry(kind).or_insert(0) += 1;
    }

    /// Records written for `kind`.
    pub fn written(&self, kind: EntityKind) -> usize {
        self.written.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_written(&self) -> usize {
        self.written.values().sum()
    }

    /// True when no element was dropped.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// `error` followed by its sources, joined with `": "`. A source whose text
/// the message already contains is not repeated.
pub fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
