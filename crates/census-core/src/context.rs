//! Shared state for processing submissions.
//!
//! A [`PipelineContext`] holds the choice release and processing options.
//! It is read-only while submissions are processed, so one context can be
//! shared across threads.

use census_model::{ChoiceRegistry, ProcessingOptions};
use census_transform::Decoder;

#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    /// Choice tables used for decoding.
    pub choices: ChoiceRegistry,
    /// Processing options (failure mode, age gates).
    pub options: ProcessingOptions,
}

impl PipelineContext {
    pub fn new(choices: ChoiceRegistry) -> Self {
        Self {
            choices,
            options: ProcessingOptions::default(),
        }
    }

    /// Sets the processing options.
    #[must_use]
    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.choices)
    }
}
