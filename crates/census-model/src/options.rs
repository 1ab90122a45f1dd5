//! Configuration options for submission processing.

use serde::{Deserialize, Serialize};

/// What happens when a repeating-group element fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Log and skip the element; the rest of the submission is written.
    #[default]
    Partial,
    /// Extract everything first and write nothing if any element fails.
    Strict,
}

/// Options controlling submission processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Element failure handling.
    pub failure_mode: FailureMode,

    /// Youngest age whose marital status answers are kept.
    pub marital_status_min_age: i64,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::Partial,
            marital_status_min_age: 10,
        }
    }
}

impl ProcessingOptions {
    /// Options for all-or-nothing processing.
    pub fn strict() -> Self {
        Self {
            failure_mode: FailureMode::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }
}
