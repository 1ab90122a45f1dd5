#![deny(unsafe_code)]

use std::path::PathBuf;

/// Failure to verify or load a choice-table release.
#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("choice manifest {path} is not valid TOML: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid choice manifest: {message}")]
    InvalidManifest { message: String },

    #[error("choice table `{name}` is listed twice")]
    DuplicateTable { name: String },

    /// The pinned digest is not a SHA-256 hex string.
    #[error("choice table `{table}` has a malformed digest `{digest}`")]
    MalformedDigest { table: String, digest: String },

    /// The table path is absolute, escapes the release or is not a CSV file.
    #[error("choice table `{table}` has unsafe path {path}: {reason}")]
    UnsafeTablePath {
        table: String,
        path: PathBuf,
        reason: &'static str,
    },

    #[error("choice table `{table}` is missing: {path}")]
    MissingTable { table: String, path: PathBuf },

    /// A file in the release directory that no table lists.
    #[error("file {path} is not listed in the choice manifest")]
    UnlistedFile { path: PathBuf },

    #[error("choice table `{table}` was modified: {path} hashes to {actual}, manifest pins {expected}")]
    DigestMismatch {
        table: String,
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("malformed choice CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.into(),
        }
    }
}
