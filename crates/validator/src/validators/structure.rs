//! Shape of the value itself: `empty`, `has_keys`, `has_only_keys`.

use indexmap::IndexMap;

use super::{BuiltinTable, Check, insert};
use crate::error::{CheckResult, Error};
use crate::metrics;
use crate::value::Value;

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "empty", empty);
    insert(table, "has_keys", has_keys);
    insert(table, "has_only_keys", has_only_keys);
}

/// Passes when the value is empty. Kinds without emptiness never fail.
fn empty(value: &Value, check: &Check<'_>) -> CheckResult {
    check.ensure(matches!(value, Value::Bool(_)) || metrics::is_empty(value))
}

fn entries<'v>(value: &'v Value, check: &Check<'_>) -> Result<&'v IndexMap<String, Value>, Error> {
    match value {
        Value::Map(map) => Ok(map),
        other => Err(check.mismatch("map", other.kind())),
    }
}

fn keys_failure(check: &Check<'_>) -> CheckResult {
    Err(check.fail_with(&[check.params().join(", ")]).into())
}

fn has_keys(value: &Value, check: &Check<'_>) -> CheckResult {
    let map = entries(value, check)?;
    if check.params().iter().all(|key| map.contains_key(key)) {
        Ok(())
    } else {
        keys_failure(check)
    }
}

fn has_only_keys(value: &Value, check: &Check<'_>) -> CheckResult {
    let map = entries(value, check)?;
    if map.len() == check.params().len() && check.params().iter().all(|key| map.contains_key(key)) {
        Ok(())
    } else {
        keys_failure(check)
    }
}
