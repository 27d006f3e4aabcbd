//! Conversions between core value types and rusqlite parameter types.

use chrono::{DateTime, Utc};
use gab_tidy_core::{Row, SqlValue};

/// Convert one mapped value into a bindable rusqlite value.
pub fn encode_value(value: &SqlValue) -> rusqlite::types::Value {
  match value {
    SqlValue::Null => rusqlite::types::Value::Null,
    SqlValue::Integer(n) => rusqlite::types::Value::Integer(*n),
    SqlValue::Text(s) => rusqlite::types::Value::Text(s.clone()),
  }
}

/// Convert a whole row for use with `params_from_iter`.
pub fn encode_row(row: &Row) -> Vec<rusqlite::types::Value> {
  row.iter().map(encode_value).collect()
}

/// ISO 8601 / RFC 3339 UTC timestamp, as stored in `_inserted_files`.
pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}
