use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use parking_lot::Mutex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, params_from_iter};
use serde_json::Value;
use tracing::debug;

use crate::engine::errors::ExecutionError;
use crate::engine::query::CompiledQuery;

/// Column names, in statement metadata order, paired with positional row
/// values. Exists only long enough to be reshaped into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Single read connection to the policies database, opened once and reused
/// for the process lifetime.
///
/// rusqlite connections are not Sync, so statement execution is serialized
/// behind the mutex. Swapping this for a pool would only touch `execute`.
pub struct PolicyStore {
    conn: Mutex<Connection>,
}

impl PolicyStore {
    /// Opens the database read-only. Fails if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExecutionError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Wraps an already opened connection. Tests use this with seeded
    /// in-memory databases.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Runs one compiled statement and collects its full result set.
    pub fn execute(&self, query: &CompiledQuery) -> Result<ResultSet, ExecutionError> {
        debug!(target: "policy_metrics::store", sql = %query.sql, "Executing statement");

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&query.sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = stmt.query(params_from_iter(query.params.iter()))?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                values.push(json_value(row.get_ref(idx)?));
            }
            collected.push(values);
        }

        Ok(ResultSet {
            columns,
            rows: collected,
        })
    }
}

fn json_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(r) => serde_json::Number::from_f64(r)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).to_string()),
        ValueRef::Blob(b) => Value::String(BASE64.encode(b)),
    }
}
