//! Membership: `in`, `not_in`, `accepted`.

use super::{BuiltinTable, Check, insert};
use crate::error::{CheckResult, Error};
use crate::value::Value;

const ACCEPTED: [&str; 5] = ["yes", "on", "1", "y", "true"];

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "in", one_of);
    insert(table, "not_in", none_of);
    insert(table, "accepted", accepted);
}

/// Text matches a parameter exactly; numbers match a parameter that parses to
/// the same float.
fn contains(value: &Value, check: &Check<'_>) -> Result<bool, Error> {
    match value {
        Value::Text(s) => Ok(check.params().iter().any(|p| p == s)),
        Value::Int(_) | Value::Uint(_) | Value::Float(_) => {
            let n = value.as_f64().unwrap_or(f64::NAN);
            // Every parameter must parse, whichever one matches.
            let candidates = (0..check.params().len())
                .map(|i| check.number(i))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(candidates.contains(&n))
        }
        other => Err(check.mismatch("text or number", other.kind())),
    }
}

fn listed(check: &Check<'_>, found: bool, wanted: bool) -> CheckResult {
    if found == wanted {
        Ok(())
    } else {
        Err(check.fail_with(&[check.params().join(", ")]).into())
    }
}

fn one_of(value: &Value, check: &Check<'_>) -> CheckResult {
    listed(check, contains(value, check)?, true)
}

fn none_of(value: &Value, check: &Check<'_>) -> CheckResult {
    listed(check, contains(value, check)?, false)
}

fn accepted(value: &Value, check: &Check<'_>) -> CheckResult {
    let ok = match value {
        Value::Text(s) => ACCEPTED.contains(&s.as_str()),
        Value::Int(n) => *n == 1,
        Value::Uint(n) => *n == 1,
        Value::Bool(b) => *b,
        other => return Err(check.mismatch("text, integer or bool", other.kind()).into()),
    };
    check.ensure(ok)
}
