//! Record batch validation.
//!
//! A [`Record`] lists its fields as [`Field`] descriptors: a name, a value and
//! the rule specifications declared per tag. `#[derive(Record)]` writes this
//! from `#[tag(...)]` field attributes.

use std::borrow::Cow;

use crate::error::Result;
use crate::failure::FieldErrors;
use crate::registry::Registry;
use crate::value::Value;

/// One field of a record, ready for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Cow<'static, str>,
    pub value: Value,
    /// `(tag, rule spec)` pairs in declaration order.
    pub tags: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Field {
    pub fn new(name: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            tags: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(
        mut self,
        tag: impl Into<Cow<'static, str>>,
        spec: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.tags.push((tag.into(), spec.into()));
        self
    }

    /// The rule spec declared under `tag`, if any.
    pub fn tag(&self, tag: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, spec)| spec.as_ref())
    }

    /// Joins the specs of `tags`, in the order given, with `|`. Missing and
    /// empty tags contribute nothing.
    pub fn rule_spec<S: AsRef<str>>(&self, tags: &[S]) -> String {
        tags.iter()
            .filter_map(|tag| self.tag(tag.as_ref()))
            .filter(|spec| !spec.is_empty())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// A structured value whose fields can be validated one by one.
pub trait Record {
    fn fields(&self) -> Vec<Field>;
}

impl<T: Record + ?Sized> Record for &T {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

/// Validates every field of `record` with `registry`.
///
/// An empty `tags` slice reads the registry's default tag. Only fields with
/// failures appear in the result, each failure tagged with its field name.
pub fn validate_record_with<R, S>(registry: &Registry, record: &R, tags: &[S]) -> Result<FieldErrors>
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    let default_tag = [registry.default_tag()];
    let mut errors = FieldErrors::new();

    for field in record.fields() {
        let spec = if tags.is_empty() {
            field.rule_spec(&default_tag)
        } else {
            field.rule_spec(tags)
        };
        let failures = crate::engine::validate_with(registry, field.value, [spec])?;
        if failures.has_errors() {
            tracing::trace!(field = %field.name, failures = failures.len(), "field failed");
        }
        let failures = failures
            .into_iter()
            .map(|failure| failure.with_field(field.name.as_ref()))
            .collect();
        errors.insert(field.name, failures);
    }

    Ok(errors)
}
