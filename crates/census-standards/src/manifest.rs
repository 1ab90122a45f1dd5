#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Schema identifier expected in `[manifest] schema`.
pub const MANIFEST_SCHEMA: &str = "census.choice-manifest";

/// Supported `[manifest] schema_version`.
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Parsed `manifest.toml` of one choice-table release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub tables: Vec<ManifestTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
    /// Release identifier; must match the directory name.
    pub version: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// One choice-table CSV listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestTable {
    pub name: String,
    pub path: String,
    pub sha256: String,
}
