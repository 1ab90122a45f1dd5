#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use census_model::ChoiceRegistry;

use crate::choice_csv::parse_choice_csv;
use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::manifest::{MANIFEST_SCHEMA, MANIFEST_SCHEMA_VERSION, Manifest, ManifestTable};
use crate::paths::choices_dir;

const MANIFEST_FILE: &str = "manifest.toml";

/// Result of verifying one choice-table release.
#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub choices_dir: PathBuf,
    pub version: String,
    pub table_count: usize,
    pub entry_count: usize,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct TableSummary {
    pub name: String,
    pub path: String,
    pub entries: usize,
}

/// Verify and load the release `version` under the standards `root`.
pub fn load_choices(root: &Path, version: &str) -> Result<(ChoiceRegistry, VerifySummary), StandardsError> {
    let dir = choices_dir(root, version);
    let (registry, summary) = verify_and_load(&dir)?;
    if registry.version != version {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "manifest version {} does not match requested version {version}",
                registry.version
            ),
        });
    }
    Ok((registry, summary))
}

/// Verify every table listed in `dir/manifest.toml` and load them.
pub fn verify_and_load(dir: &Path) -> Result<(ChoiceRegistry, VerifySummary), StandardsError> {
    let manifest = load_manifest(&dir.join(MANIFEST_FILE))?;
    validate_manifest(&manifest, dir)?;

    let mut tables = manifest.tables.clone();
    tables.sort_by(|a, b| a.name.cmp(&b.name));

    let mut registry = ChoiceRegistry::new(manifest.manifest.version.clone());
    let mut summaries = Vec::with_capacity(tables.len());
    for table in &tables {
        let (path, bytes) = read_table(dir, table)?;
        let choices = parse_choice_csv(&table.name, &path, &bytes)?;
        summaries.push(TableSummary {
            name: table.name.clone(),
            path: table.path.clone(),
            entries: choices.len(),
        });
        registry.add_table(choices);
    }

    let summary = VerifySummary {
        choices_dir: dir.to_path_buf(),
        version: manifest.manifest.version.clone(),
        table_count: summaries.len(),
        entry_count: summaries.iter().map(|t| t.entries).sum(),
        tables: summaries,
    };
    Ok((registry, summary))
}

fn load_manifest(path: &Path) -> Result<Manifest, StandardsError> {
    let contents = fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest, dir: &Path) -> Result<(), StandardsError> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }
    if manifest.manifest.version.trim().is_empty() {
        return Err(StandardsError::InvalidManifest {
            message: "version must not be empty".to_string(),
        });
    }

    let mut names = BTreeSet::new();
    let mut listed = BTreeSet::new();
    for table in &manifest.tables {
        if table.name.trim().is_empty() {
            return Err(StandardsError::InvalidManifest {
                message: format!("table name missing for {}", table.path),
            });
        }
        if !names.insert(table.name.as_str()) {
            return Err(StandardsError::DuplicateTable {
                name: table.name.clone(),
            });
        }
        check_digest(table)?;
        listed.insert(table_path(table)?);
    }

    let mut present = BTreeSet::new();
    collect_release_files(dir, Path::new(""), &mut present)?;
    let stray = present
        .iter()
        .find(|path| path.as_path() != Path::new(MANIFEST_FILE) && !listed.contains(*path));
    if let Some(stray) = stray {
        return Err(StandardsError::UnlistedFile {
            path: dir.join(stray),
        });
    }
    Ok(())
}

/// Read a listed table and compare it against its pinned digest.
fn read_table(dir: &Path, table: &ManifestTable) -> Result<(PathBuf, Vec<u8>), StandardsError> {
    let path = dir.join(&table.path);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Err(StandardsError::MissingTable {
                table: table.name.clone(),
                path,
            });
        }
        Err(error) => return Err(StandardsError::io(path, error)),
    };

    let actual = sha256_hex(&bytes);
    if !actual.eq_ignore_ascii_case(&table.sha256) {
        return Err(StandardsError::DigestMismatch {
            table: table.name.clone(),
            path,
            expected: table.sha256.to_ascii_lowercase(),
            actual,
        });
    }
    Ok((path, bytes))
}

fn check_digest(table: &ManifestTable) -> Result<(), StandardsError> {
    let digest = &table.sha256;
    if digest.len() == 64 && digest.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(StandardsError::MalformedDigest {
            table: table.name.clone(),
            digest: digest.clone(),
        })
    }
}

/// The table's CSV path, relative to the release directory and without
/// `.` segments.
fn table_path(table: &ManifestTable) -> Result<PathBuf, StandardsError> {
    let rejected = |reason: &'static str| StandardsError::UnsafeTablePath {
        table: table.name.clone(),
        path: PathBuf::from(&table.path),
        reason,
    };
    if table.path.contains('\\') {
        return Err(rejected("separators must be '/'"));
    }

    let mut clean = PathBuf::new();
    for component in Path::new(&table.path).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(rejected("leaves the release directory")),
            Component::RootDir | Component::Prefix(_) => return Err(rejected("must be relative")),
        }
    }
    let is_csv = clean
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(rejected("choice tables are .csv files"));
    }
    Ok(clean)
}

/// Every file below `dir`, keyed by its path relative to the release root.
fn collect_release_files(
    dir: &Path,
    prefix: &Path,
    files: &mut BTreeSet<PathBuf>,
) -> Result<(), StandardsError> {
    let entries = fs::read_dir(dir).map_err(|error| StandardsError::io(dir, error))?;
    for entry in entries {
        let entry = entry.map_err(|error| StandardsError::io(dir, error))?;
        let relative = prefix.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|error| StandardsError::io(entry.path(), error))?;
        if file_type.is_dir() {
            collect_release_files(&entry.path(), &relative, files)?;
        } else {
            files.insert(relative);
        }
    }
    Ok(())
}
