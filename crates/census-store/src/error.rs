//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Record store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database could not be opened or configured.
    #[error("failed to open database {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Table creation failed.
    #[error("failed to create table {table}")]
    Schema {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// Upsert of one record failed.
    #[error("failed to write {table} record {id}")]
    Write {
        table: &'static str,
        id: String,
        #[source]
        source: rusqlite::Error,
    },

    /// Lookup failed.
    #[error("failed to read from {table}")]
    Read {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// Transaction could not be started or committed.
    #[error("transaction failed")]
    Transaction {
        #[source]
        source: rusqlite::Error,
    },

    /// Record could not be converted to or from columns.
    #[error("failed to convert {table} record {id}")]
    Serialize {
        table: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    /// Column value of a shape the table cannot hold.
    #[error("unsupported value in {table}.{column}: {message}")]
    Column {
        table: &'static str,
        column: String,
        message: String,
    },
}
