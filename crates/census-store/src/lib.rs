//! Stores for normalized census records.
//!
//! All writes are upserts keyed by the record id. Records are never
//! deleted; re-processing a submission overwrites its rows in place.

pub mod error;
pub mod memory;
pub mod sqlite;

use census_model::{EntityKind, Record};

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Destination for normalized records.
pub trait RecordStore: Send {
    /// Insert or overwrite one record.
    fn upsert(&mut self, record: &Record) -> Result<(), StoreError>;

    /// Insert or overwrite all records, or none of them.
    fn upsert_all(&mut self, records: &[Record]) -> Result<(), StoreError>;

    /// Number of stored records of `kind`.
    fn count(&self, kind: EntityKind) -> Result<usize, StoreError>;

    /// Stored record of `kind` with primary key `id`.
    fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Record>, StoreError>;
}
