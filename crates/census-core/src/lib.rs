//! Entity extraction and persistence for census submissions.
//!
//! A [`Pipeline`] takes one raw submission and its [`FormKind`], extracts
//! the base record (household, business or building) and the records of
//! its repeating groups, and upserts them into a
//! [`RecordStore`](census_store::RecordStore).
//!
//! ```no_run
//! use census_core::{Pipeline, PipelineContext};
//! use census_model::{ChoiceRegistry, FormKind, RawSubmission};
//! use census_store::MemoryStore;
//!
//! let pipeline = Pipeline::new(PipelineContext::new(ChoiceRegistry::new("2024-01")));
//! let submission = RawSubmission::from_json_str(r#"{"__id": "hh-1"}"#).unwrap();
//! let mut store = MemoryStore::new();
//! let report = pipeline.process(FormKind::Household, &submission, &mut store).unwrap();
//! assert!(report.is_complete());
//! ```
//!
//! [`FormKind`]: census_model::FormKind

pub mod context;
pub mod demographics;
pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod report;

pub use context::PipelineContext;
pub use demographics::{DemographicSource, Demographics};
pub use error::{ExtractError, PipelineError};
pub use extractors::{ExtractedBase, extract_submission};
pub use pipeline::Pipeline;
pub use report::{ElementFailure, SubmissionReport, error_chain};
