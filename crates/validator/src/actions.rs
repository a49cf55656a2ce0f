//! Value transforms applied before any check runs.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::value::Value;

type TransformFn = dyn Fn(Value) -> Result<Value> + Send + Sync;

/// A shared value transform.
///
/// Every queued action gets its own slot, so queuing the same action twice
/// applies it twice.
#[derive(Clone)]
pub struct Action {
    name: Option<Arc<str>>,
    transform: Arc<TransformFn>,
}

impl Action {
    /// Wraps an unnamed transform.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: None,
            transform: Arc::new(transform),
        }
    }

    /// Wraps a transform that cannot fail.
    pub fn infallible<F>(transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(move |value| Ok(transform(value)))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn apply(&self, value: Value) -> Result<Value> {
        (self.transform)(value)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name.as_deref().unwrap_or("<anonymous>"))
            .finish_non_exhaustive()
    }
}

/// Built-in actions, by registered name.
pub(crate) fn builtins() -> [(&'static str, Action); 4] {
    [
        ("trim", text_action("trim", |s| s.trim().to_owned())),
        ("lower", text_action("lower", |s| s.to_lowercase())),
        ("upper", text_action("upper", |s| s.to_uppercase())),
        ("clear", Action::infallible(clear).named("clear")),
    ]
}

fn text_action(name: &'static str, op: fn(&str) -> String) -> Action {
    Action::new(move |value| map_text(name, value, op)).named(name)
}

/// Applies `op` to the text behind any optional wrappers. An unset reference
/// passes through untouched.
fn map_text(name: &str, value: Value, op: fn(&str) -> String) -> Result<Value> {
    match value {
        Value::Text(s) => Ok(Value::Text(op(&s))),
        Value::Optional(Some(inner)) => {
            Ok(Value::Optional(Some(Box::new(map_text(name, *inner, op)?))))
        }
        Value::Optional(None) => Ok(Value::NULL),
        other => Err(Error::mismatch(name, "text", other.kind())),
    }
}

/// Resets text and numbers to their zero value; other kinds are kept.
fn clear(value: Value) -> Value {
    match value {
        Value::Text(_) => Value::Text(String::new()),
        Value::Int(_) => Value::Int(0),
        Value::Uint(_) => Value::Uint(0),
        Value::Float(_) => Value::Float(0.0),
        Value::Optional(Some(inner)) => Value::Optional(Some(Box::new(clear(*inner)))),
        other => other,
    }
}
