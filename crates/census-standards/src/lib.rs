#![deny(unsafe_code)]

//! Versioned choice tables for census submission decoding.
//!
//! A release lives in `standards/choices/<version>/` as one CSV per table
//! plus a `manifest.toml` pinning each file's SHA-256:
//!
//! ```toml
//! [manifest]
//! schema = "census.choice-manifest"
//! schema_version = 1
//! version = "2024-01"
//!
//! [[tables]]
//! name = "house_roof"
//! path = "house_roof.csv"
//! sha256 = "..."
//! ```

pub mod choice_csv;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::paths::{DEFAULT_CHOICES_VERSION, STANDARDS_ENV_VAR, choices_dir, standards_root};
pub use crate::registry::{TableSummary, VerifySummary, load_choices, verify_and_load};

/// Load the default release from the default standards root.
pub fn load_default_choices() -> Result<census_model::ChoiceRegistry, StandardsError> {
    load_choices(&standards_root(), DEFAULT_CHOICES_VERSION).map(|(registry, _)| registry)
}
