use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::command::types::QuerySpec;
use crate::engine::errors::ExecutionError;
use crate::engine::query;
use crate::engine::store::{PolicyStore, ResultSet};

/// Compiles and runs one metrics request.
///
/// Returns one JSON mapping per result row, keyed by the statement's column
/// names. The statement runs under spawn_blocking so SQLite never blocks the
/// executor.
pub async fn handle(
    spec: &QuerySpec,
    store: Arc<PolicyStore>,
) -> Result<Vec<Map<String, Value>>, ExecutionError> {
    let compiled = query::compile(spec);
    debug!(target: "policy_metrics::metrics", sql = %compiled.sql, "Dispatching compiled statement");

    let result = tokio::task::spawn_blocking(move || store.execute(&compiled))
        .await
        .map_err(|e| ExecutionError::Task(e.to_string()))??;

    Ok(shape_rows(result))
}

fn shape_rows(result: ResultSet) -> Vec<Map<String, Value>> {
    let ResultSet { columns, rows } = result;
    rows.into_iter()
        .map(|row| columns.iter().cloned().zip(row).collect())
        .collect()
}
