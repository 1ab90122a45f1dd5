//! Standards directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "CENSUS_STANDARDS_DIR";

/// Choice-table release used when none is requested.
pub const DEFAULT_CHOICES_VERSION: &str = "2024-01";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `CENSUS_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Directory holding the choice tables of `version` under `root`.
pub fn choices_dir(root: &Path, version: &str) -> PathBuf {
    root.join("choices").join(version)
}
