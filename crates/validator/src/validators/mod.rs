//! Validator handles and the built-in validator table.
//!
//! Every built-in is a plain `fn(&Value, &Check) -> CheckResult`. Each group
//! module registers its rules into the shared table, the same way the
//! expression builtins are grouped by category.

mod codes;
mod credit_card;
mod date;
mod file;
mod membership;
mod password;
mod pattern;
mod size;
mod structure;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CheckResult, Error};
use crate::failure::ValidationError;
use crate::messages::MessageTable;
use crate::options::OptionSet;
use crate::value::{Kind, Value};

pub use credit_card::luhn;
pub use date::{relative_date, translate_layout};

/// Signature shared by all built-ins.
pub(crate) type BuiltinFn = fn(&Value, &Check<'_>) -> CheckResult;

/// Table of built-in validators, keyed by rule name.
pub(crate) type BuiltinTable = HashMap<&'static str, Validator>;

pub(crate) fn builtins() -> BuiltinTable {
    let mut table = BuiltinTable::new();
    size::register(&mut table);
    membership::register(&mut table);
    pattern::register(&mut table);
    structure::register(&mut table);
    codes::register(&mut table);
    date::register(&mut table);
    credit_card::register(&mut table);
    password::register(&mut table);
    file::register(&mut table);
    table
}

fn insert(table: &mut BuiltinTable, name: &'static str, check: BuiltinFn) {
    table.insert(name, Validator::new(check));
}

// ============================================================================
// CHECK CONTEXT
// ============================================================================

/// Everything a validator knows about the rule it runs for.
#[derive(Debug, Clone, Copy)]
pub struct Check<'a> {
    rule: &'a str,
    params: &'a [String],
    options: &'a OptionSet,
    messages: &'a MessageTable,
}

impl<'a> Check<'a> {
    pub fn new(
        rule: &'a str,
        params: &'a [String],
        options: &'a OptionSet,
        messages: &'a MessageTable,
    ) -> Self {
        Self {
            rule,
            params,
            options,
            messages,
        }
    }

    pub fn rule(&self) -> &'a str {
        self.rule
    }

    pub fn params(&self) -> &'a [String] {
        self.params
    }

    pub fn options(&self) -> &'a OptionSet {
        self.options
    }

    /// Positional parameter `index`, or [`Error::MissingParam`].
    pub fn param(&self, index: usize) -> Result<&'a str, Error> {
        self.params
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| Error::MissingParam {
                rule: self.rule.to_owned(),
                index,
            })
    }

    /// Positional parameter `index` parsed as a number.
    pub fn number(&self, index: usize) -> Result<f64, Error> {
        let raw = self.param(index)?;
        raw.parse::<f64>().map_err(|e| Error::InvalidParam {
            rule: self.rule.to_owned(),
            param: raw.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Failure for this rule, message rendered with the rule parameters.
    pub fn fail(&self) -> ValidationError {
        self.fail_with(self.params)
    }

    /// Failure rendered with `args` instead of the rule parameters. The error
    /// still records the rule parameters.
    pub fn fail_with(&self, args: &[String]) -> ValidationError {
        ValidationError::new(self.rule.to_owned(), self.messages.render(self.rule, args))
            .with_params(self.params.iter().cloned())
    }

    /// `Ok(())` when `passed`, otherwise [`Check::fail`].
    pub fn ensure(&self, passed: bool) -> CheckResult {
        if passed {
            Ok(())
        } else {
            Err(self.fail().into())
        }
    }

    pub fn mismatch(&self, expected: &'static str, found: Kind) -> Error {
        Error::mismatch(self.rule, expected, found)
    }

    /// The value as text, or a type mismatch.
    pub fn text<'v>(&self, value: &'v Value) -> Result<&'v str, Error> {
        value
            .as_text()
            .ok_or_else(|| self.mismatch("text", value.kind()))
    }
}

// ============================================================================
// VALIDATOR HANDLE
// ============================================================================

type CheckFn = dyn Fn(&Value, &Check<'_>) -> CheckResult + Send + Sync;

/// A shared check function.
///
/// ```rust,ignore
/// use tagcheck_validator::prelude::*;
///
/// let even = Validator::predicate(|v| matches!(v.resolved(), Value::Int(n) if n % 2 == 0));
/// let errors = validate(&3, rules![even])?;
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Clone)]
pub struct Validator {
    check: Arc<CheckFn>,
}

impl Validator {
    /// Full-context validator: sees the rule name, parameters and options.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, &Check<'_>) -> CheckResult + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
        }
    }

    /// Validator that only looks at the value.
    pub fn simple<F>(check: F) -> Self
    where
        F: Fn(&Value) -> CheckResult + Send + Sync + 'static,
    {
        Self::new(move |value, _| check(value))
    }

    /// Boolean validator; a `false` becomes the rule's templated failure.
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value, ctx| ctx.ensure(check(value)))
    }

    pub fn call(&self, value: &Value, check: &Check<'_>) -> CheckResult {
        (self.check)(value, check)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}
