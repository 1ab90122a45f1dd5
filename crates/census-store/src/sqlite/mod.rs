//! SQLite record store.
//!
//! ## Tables
//!
//! One table per entity kind, named by [`EntityKind::table`]:
//! `household`, `individual`, `land_parcel`, `crop`, `animal`,
//! `animal_product`, `death`, `business`, `business_line_item`, `building`.

pub mod schema;

use std::collections::BTreeMap;
use std::path::Path;

use census_model::{EntityKind, Record};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, OptionalExtension, params_from_iter};
use serde_json::{Map, Number, Value};
use tracing::{debug, info};

use self::schema::{TableLayout, init_schema};
use crate::{RecordStore, StoreError};

/// Record store backed by one SQLite database.
pub struct SqliteStore {
    conn: Connection,
    layouts: BTreeMap<EntityKind, TableLayout>,
}

impl SqliteStore {
    /// Open or create the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        info!(path = %path.display(), "opening SQLite database");
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_connection(conn, path)
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        debug!("opening in-memory SQLite database");
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Self::with_connection(conn, Path::new(":memory:"))
    }

    fn with_connection(conn: Connection, path: &Path) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let layouts: BTreeMap<EntityKind, TableLayout> = EntityKind::ALL
            .into_iter()
            .map(|kind| (kind, TableLayout::new(kind)))
            .collect();
        let ordered: Vec<TableLayout> = layouts.values().cloned().collect();
        init_schema(&conn, &ordered)?;
        Ok(Self { conn, layouts })
    }

    fn layout(&self, kind: EntityKind) -> &TableLayout {
        // Every kind gets a layout in `with_connection`.
        &self.layouts[&kind]
    }
}

fn write_record(conn: &Connection, layout: &TableLayout, record: &Record) -> Result<(), StoreError> {
    let table = layout.kind.table();
    let values = record_columns(layout, record)?;
    let mut statement = conn
        .prepare_cached(&layout.upsert_sql)
        .map_err(|source| StoreError::Write {
            table,
            id: record.id().to_string(),
            source,
        })?;
    statement
        .execute(params_from_iter(values))
        .map_err(|source| StoreError::Write {
            table,
            id: record.id().to_string(),
            source,
        })?;
    Ok(())
}

fn record_columns(layout: &TableLayout, record: &Record) -> Result<Vec<SqlValue>, StoreError> {
    let table = layout.kind.table();
    let serialize_error = |source| StoreError::Serialize {
        table,
        id: record.id().to_string(),
        source,
    };
    let Value::Object(mut fields) = record.to_value().map_err(serialize_error)? else {
        return Err(StoreError::Column {
            table,
            column: "*".to_string(),
            message: "record did not serialize to an object".to_string(),
        });
    };

    layout
        .columns
        .iter()
        .map(|column| {
            let value = fields.remove(column).unwrap_or(Value::Null);
            to_sql_value(value).map_err(|message| StoreError::Column {
                table,
                column: column.clone(),
                message,
            })
        })
        .collect()
}

fn to_sql_value(value: Value) -> Result<SqlValue, String> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(flag) => SqlValue::Integer(i64::from(flag)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => SqlValue::Integer(integer),
            None => SqlValue::Real(
                number
                    .as_f64()
                    .ok_or_else(|| format!("number {number} is out of range"))?,
            ),
        },
        Value::String(text) => SqlValue::Text(text),
        list @ Value::Array(_) => {
            SqlValue::Text(serde_json::to_string(&list).map_err(|e| e.to_string())?)
        }
        Value::Object(_) => return Err("nested objects are not stored".to_string()),
    })
}

fn from_sql_value(layout: &TableLayout, column: &str, value: ValueRef<'_>) -> Result<Value, String> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(integer) if layout.is_flag(column) => Value::Bool(integer != 0),
        ValueRef::Integer(integer) => Value::from(integer),
        ValueRef::Real(real) => Number::from_f64(real)
            .map(Value::Number)
            .ok_or_else(|| format!("non-finite number {real}"))?,
        ValueRef::Text(bytes) => {
            let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
            if layout.is_list(column) {
                serde_json::from_str(text).map_err(|e| e.to_string())?
            } else {
                Value::String(text.to_string())
            }
        }
        ValueRef::Blob(_) => return Err("unexpected blob".to_string()),
    })
}

impl RecordStore for SqliteStore {
    fn upsert(&mut self, record: &Record) -> Result<(), StoreError> {
        write_record(&self.conn, self.layout(record.kind()), record)
    }

    fn upsert_all(&mut self, records: &[Record]) -> Result<(), StoreError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|source| StoreError::Transaction { source })?;
        for record in records {
            let layout = &self.layouts[&record.kind()];
            write_record(&tx, layout, record)?;
        }
        tx.commit()
            .map_err(|source| StoreError::Transaction { source })?;
        debug!(records = records.len(), "committed record batch");
        Ok(())
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        let table = kind.table();
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .map_err(|source| StoreError::Read { table, source })?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Record>, StoreError> {
        let layout = self.layout(kind);
        let table = kind.table();
        let mut statement = self
            .conn
            .prepare_cached(&layout.select_sql)
            .map_err(|source| StoreError::Read { table, source })?;

        let row = statement
            .query_row([id], |row| {
                let mut fields = Map::new();
                for (index, column) in layout.columns.iter().enumerate() {
                    let value = from_sql_value(layout, column, row.get_ref(index)?)
                        .map_err(|message| {
                            rusqlite::Error::FromSqlConversionFailure(
                                index,
                                row.get_ref(index).map(|v| v.data_type()).unwrap_or(
                                    rusqlite::types::Type::Null,
                                ),
                                message.into(),
                            )
                        })?;
                    fields.insert(column.clone(), value);
                }
                Ok(fields)
            })
            .optional()
            .map_err(|source| StoreError::Read { table, source })?;

        row.map(|fields| {
            Record::from_value(kind, Value::Object(fields)).map_err(|source| {
                StoreError::Serialize {
                    table,
                    id: id.to_string(),
                    source,
                }
            })
        })
        .transpose()
    }
}
