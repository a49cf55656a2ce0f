//! Size comparisons: `min`, `max`, `gt`, `lt`, `len`.

use super::{BuiltinTable, Check, insert};
use crate::error::CheckResult;
use crate::metrics;
use crate::value::Value;

const SIZED: &str = "text, collection or number";

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "min", min);
    insert(table, "max", max);
    insert(table, "gt", gt);
    insert(table, "lt", lt);
    insert(table, "len", len);
}

fn compare(value: &Value, check: &Check<'_>, passes: fn(f64, f64) -> bool) -> CheckResult {
    let size = metrics::size(value).map_err(|kind| check.mismatch(SIZED, kind))?;
    let bound = check.number(0)?;
    check.ensure(passes(size, bound))
}

fn min(value: &Value, check: &Check<'_>) -> CheckResult {
    compare(value, check, |size, bound| size >= bound)
}

fn max(value: &Value, check: &Check<'_>) -> CheckResult {
    compare(value, check, |size, bound| size <= bound)
}

fn gt(value: &Value, check: &Check<'_>) -> CheckResult {
    compare(value, check, |size, bound| size > bound)
}

fn lt(value: &Value, check: &Check<'_>) -> CheckResult {
    compare(value, check, |size, bound| size < bound)
}

fn len(value: &Value, check: &Check<'_>) -> CheckResult {
    let len = metrics::len(value).map_err(|kind| check.mismatch("text or collection", kind))?;
    let expected = check.number(0)?;
    check.ensure(len as f64 == expected)
}

#[cfg(test)]
mod tests {
    use crate::error::{CheckError, Error};
    use crate::validators::testing::{passes, run, run_value};
    use crate::value::{ToValue, Value};
    use rstest::rstest;

    #[rstest]
    #[case::min_exact("min", "3", "abc", true)]
    #[case::min_short("min", "3", "ab", false)]
    #[case::min_chars("min", "3", "ёжи", true)]
    #[case::max_exact("max", "3", "abc", true)]
    #[case::max_long("max", "3", "abcd", false)]
    #[case::gt_equal("gt", "3", "abc", false)]
    #[case::gt_more("gt", "3", "abcd", true)]
    #[case::lt_equal("lt", "3", "abc", false)]
    #[case::lt_less("lt", "3", "ab", true)]
    #[case::len_equal("len", "3", "abc", true)]
    #[case::len_other("len", "3", "abcd", false)]
    fn text_sizes(#[case] rule: &str, #[case] bound: &str, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(passes(rule, &[bound], input), ok);
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(passes("min", &["18"], Value::Int(18)));
        assert!(!passes("min", &["18"], Value::Int(17)));
        assert!(passes("max", &["1.5"], Value::Float(1.25)));
        assert!(passes("gt", &["-1"], Value::Uint(0)));
    }

    #[test]
    fn collections_compare_by_length() {
        let list = vec!["a", "b"].to_value();
        assert!(run_value("min", &["2"], &list).is_ok());
        assert!(run_value("lt", &["2"], &list).is_err());
        assert!(run_value("len", &["2"], &list).is_ok());
    }

    #[test]
    fn failure_message_carries_the_bound() {
        match run("min", &["3"], "ab") {
            Err(CheckError::Invalid(e)) => {
                assert!(e.message.contains('3'));
                assert_eq!(e.params, vec!["3"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unsupported_kinds_are_fatal() {
        assert!(matches!(
            run("min", &["1"], true),
            Err(CheckError::Fatal(Error::TypeMismatch { .. }))
        ));
        assert!(matches!(
            run("len", &["1"], 5_i64),
            Err(CheckError::Fatal(Error::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn bad_bound_is_fatal() {
        assert!(matches!(
            run("max", &["ten"], "abc"),
            Err(CheckError::Fatal(Error::InvalidParam { .. }))
        ));
        assert!(matches!(
            run("max", &[], "abc"),
            Err(CheckError::Fatal(Error::MissingParam { index: 0, .. }))
        ));
    }
}
