//! Uniform size and emptiness over the value model.

use crate::value::{Kind, Value};

/// Length or magnitude of a value.
///
/// Text counts chars, collections count elements, numbers are their own
/// size. Other kinds are rejected with their [`Kind`] so the caller can report
/// a type mismatch under its own rule name.
pub fn size(value: &Value) -> Result<f64, Kind> {
    match value {
        Value::Text(s) => Ok(s.chars().count() as f64),
        Value::List(items) => Ok(items.len() as f64),
        Value::Map(entries) => Ok(entries.len() as f64),
        Value::Int(n) => Ok(*n as f64),
        Value::Uint(n) => Ok(*n as f64),
        Value::Float(n) => Ok(*n),
        other => Err(other.kind()),
    }
}

/// Length only: text chars or collection elements.
pub fn len(value: &Value) -> Result<usize, Kind> {
    match value {
        Value::Text(s) => Ok(s.chars().count()),
        Value::List(items) => Ok(items.len()),
        Value::Map(entries) => Ok(entries.len()),
        other => Err(other.kind()),
    }
}

/// Whether the value counts as "not provided".
///
/// Only this decides the `required` short-circuit, so it never fails: kinds
/// without a notion of emptiness are simply non-empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Text(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Int(n) => *n == 0,
        Value::Uint(n) => *n == 0,
        Value::Float(n) => *n == 0.0,
        Value::Optional(inner) => inner.is_none(),
        Value::Bool(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;
    use rstest::rstest;

    #[rstest]
    #[case::ascii("abc", 3.0)]
    #[case::multibyte("привет", 6.0)]
    #[case::emoji("a🦀b", 3.0)]
    #[case::blank("", 0.0)]
    fn text_size_counts_chars(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(size(&input.to_value()), Ok(expected));
    }

    #[test]
    fn numbers_are_their_own_size() {
        assert_eq!(size(&Value::Int(-4)), Ok(-4.0));
        assert_eq!(size(&Value::Uint(12)), Ok(12.0));
        assert_eq!(size(&Value::Float(2.5)), Ok(2.5));
    }

    #[test]
    fn collections_count_elements() {
        assert_eq!(size(&vec![1, 2, 3].to_value()), Ok(3.0));
        assert_eq!(len(&Value::Map(Default::default())), Ok(0));
    }

    #[test]
    fn unsized_kinds_are_rejected() {
        assert_eq!(size(&Value::Bool(true)), Err(Kind::Bool));
        assert_eq!(size(&Value::NULL), Err(Kind::Optional));
        assert_eq!(len(&Value::Int(3)), Err(Kind::Int));
    }

    #[rstest]
    #[case::blank_text(Value::from(""), true)]
    #[case::text(Value::from(" "), false)]
    #[case::zero(Value::Int(0), true)]
    #[case::zero_float(Value::Float(0.0), true)]
    #[case::one(Value::Uint(1), false)]
    #[case::null(Value::NULL, true)]
    #[case::some_empty(Some(String::new()).to_value(), false)]
    #[case::empty_list(Value::List(vec![]), true)]
    #[case::bool_false(Value::Bool(false), false)]
    fn emptiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_empty(&value), expected);
    }
}
