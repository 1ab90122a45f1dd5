//! Table definitions for the SQLite store.
//!
//! One table per [`EntityKind`]. Columns are the record's field names;
//! `id` is the primary key and child tables reference their parent.
//! Boolean columns hold 0/1 and multiple-choice columns hold JSON arrays.

use census_model::{EntityKind, Record};
use rusqlite::Connection;

use crate::StoreError;

/// Column layout of one table.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub kind: EntityKind,
    pub columns: Vec<String>,
    pub upsert_sql: String,
    pub select_sql: String,
}

impl TableLayout {
    pub fn new(kind: EntityKind) -> Self {
        let columns = Record::columns(kind);
        let table = kind.table();

        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let updates: Vec<String> = columns
            .iter()
            .filter(|column| column.as_str() != "id")
            .map(|column| format!("{column} = excluded.{column}"))
            .collect();
        let upsert_sql = format!(
            "INSERT INTO {table} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
            columns.join(", "),
            placeholders.join(", "),
            updates.join(", ")
        );
        let select_sql = format!("SELECT {} FROM {table} WHERE id = ?1", columns.join(", "));

        Self {
            kind,
            columns,
            upsert_sql,
            select_sql,
        }
    }

    pub fn is_flag(&self, column: &str) -> bool {
        Record::flag_fields(self.kind).contains(&column)
    }

    pub fn is_list(&self, column: &str) -> bool {
        Record::list_fields(self.kind).contains(&column)
    }

    pub fn create_sql(&self) -> String {
        let parent = self.kind.parent();
        let mut definitions = Vec::with_capacity(self.columns.len() + 1);
        for column in &self.columns {
            let definition = if column == "id" {
                "id TEXT PRIMARY KEY NOT NULL".to_string()
            } else if parent.is_some_and(|(_, key)| key == column) {
                format!("{column} TEXT NOT NULL")
            } else if self.is_flag(column) {
                format!("{column} INTEGER")
            } else if self.is_list(column) {
                format!("{column} TEXT")
            } else {
                column.clone()
            };
            definitions.push(definition);
        }
        if let Some((parent_kind, key)) = parent {
            definitions.push(format!(
                "FOREIGN KEY ({key}) REFERENCES {}(id)",
                parent_kind.table()
            ));
        }
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.kind.table(),
            definitions.join(",\n    ")
        )
    }
}

/// Create every table that does not exist yet.
pub fn init_schema(conn: &Connection, layouts: &[TableLayout]) -> Result<(), StoreError> {
    for layout in layouts {
        conn.execute_batch(&layout.create_sql())
            .map_err(|source| StoreError::Schema {
                table: layout.kind.table(),
                source,
            })?;
        if let Some((_, key)) = layout.kind.parent() {
            let table = layout.kind.table();
            conn.execute_batch(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_{key} ON {table}({key})"
            ))
            .map_err(|source| StoreError::Schema { table, source })?;
        }
    }
    Ok(())
}
