//! Submission input discovery and parsing.
//!
//! Accepted files:
//! - `.json`: one submission object, or an array of submissions
//! - `.ndjson` / `.jsonl`: one submission per non-blank line
//!
//! Directories are scanned (not recursively) for such files in name order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use census_model::{RawSubmission, SubmissionError};
use serde_json::Value;
use tracing::{debug, warn};

use crate::logging::redact_value;

/// Input layout of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    JsonLines,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "ndjson" | "jsonl" => Some(Self::JsonLines),
            _ => None,
        }
    }
}

/// One submission read from a file, or the reason it could not be read.
#[derive(Debug)]
pub struct SourcedSubmission {
    pub source: PathBuf,
    /// Array index or line number (1-based for lines).
    pub position: usize,
    pub submission: Result<RawSubmission, SubmissionError>,
}

impl SourcedSubmission {
    /// `file:position`, for reports.
    pub fn location(&self) -> String {
        format!("{}:{}", self.source.display(), self.position)
    }
}

/// Expand `paths` into the list of input files.
///
/// Files are kept as given; directories contribute their `.json`,
/// `.ndjson` and `.jsonl` files sorted by name.
pub fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("read directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|candidate| {
                    candidate.is_file() && InputFormat::from_path(candidate).is_some()
                })
                .collect();
            found.sort();
            debug!(directory = %path.display(), files = found.len(), "scanned input directory");
            files.extend(found);
        } else if path.is_file() {
            if InputFormat::from_path(path).is_none() {
                bail!(
                    "unsupported input {}: expected .json, .ndjson or .jsonl",
                    path.display()
                );
            }
            files.push(path.clone());
        } else {
            bail!("input not found: {}", path.display());
        }
    }
    Ok(files)
}

/// Read every submission in `path`.
///
/// A malformed file is an error; a malformed submission inside a readable
/// file is returned as a failed [`SourcedSubmission`].
pub fn read_submissions(path: &Path) -> Result<Vec<SourcedSubmission>> {
    let format = InputFormat::from_path(path)
        .with_context(|| format!("unsupported input {}", path.display()))?;
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match format {
        InputFormat::Json => read_json(path, &text),
        InputFormat::JsonLines => Ok(read_json_lines(path, &text)),
    }
}

fn read_json(path: &Path, text: &str) -> Result<Vec<SourcedSubmission>> {
    let value: Value =
        serde_json::from_str(text).with_context(|| format!("parse {}", path.display()))?;
    let values = match value {
        Value::Array(values) => values,
        other => vec![other],
    };
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(position, value)| SourcedSubmission {
            source: path.to_path_buf(),
            position,
            submission: RawSubmission::new(value),
        })
        .collect())
}

fn read_json_lines(path: &Path, text: &str) -> Vec<SourcedSubmission> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let submission = RawSubmission::from_json_str(line);
            if submission.is_err() {
                warn!(
                    file = %path.display(),
                    line = index + 1,
                    content = redact_value(line),
                    "unreadable submission line"
                );
            }
            SourcedSubmission {
                source: path.to_path_buf(),
                position: index + 1,
                submission,
            }
        })
        .collect()
}
