use crate::command::types::{Aggregate, QuerySpec};

/// The table every compiled statement reads from.
const TABLE: &str = "policies";

/// A fully assembled aggregate statement, consumed exactly once.
///
/// The SQL text only ever contains field names that passed the catalog
/// whitelist; the filter value travels separately as a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<String>,
}

/// Turns a validated spec into one SELECT over the policies table.
///
/// Each aggregate becomes one select expression, in request order. When a
/// group field is set, every operation compiles to a ratio of the same
/// operation applied to target and group, which is how severity, frequency
/// and loss-ratio style metrics are expressed.
pub fn compile(spec: &QuerySpec) -> CompiledQuery {
    let select_list = spec
        .aggregates
        .iter()
        .map(|agg| select_expr(*agg, spec))
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("SELECT {select_list} FROM {TABLE}");
    let mut params = Vec::new();

    if let Some(filter) = &spec.filter {
        sql.push_str(&format!(" WHERE {} = ?1", filter.field));
        params.push(filter.value.clone());
    }

    CompiledQuery { sql, params }
}

fn select_expr(agg: Aggregate, spec: &QuerySpec) -> String {
    let op = agg.as_str();
    let target = &spec.target_field;

    match &spec.group_field {
        Some(group) => {
            format!("{op}({target}) / {op}({group}) AS {target}_by_{group}_{op}")
        }
        None => format!("{op}({target}) AS {target}_{op}"),
    }
}
