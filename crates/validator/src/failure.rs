//! Soft validation failures and their collections.
//!
//! A [`ValidationError`] says the value broke a rule. It is data, returned
//! inside [`ValidationErrors`] (one value) or [`FieldErrors`] (a record).
//! Both collections serialize to JSON as plain message strings.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed rule.
///
/// ```rust,ignore
/// use tagcheck_validator::failure::ValidationError;
///
/// let error = ValidationError::new("min", "must be greater or equal of 3")
///     .with_params(["3"])
///     .with_field("name");
/// assert_eq!(error.to_string(), "must be greater or equal of 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the failed rule, `custom` for unnamed direct validators.
    pub code: Cow<'static, str>,

    /// Rendered message.
    pub message: String,

    /// Record field the value came from.
    pub field: Option<String>,

    /// Rule parameters in clause order.
    pub params: Vec<String>,
}

impl ValidationError {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Structured form with code, field and params, for callers that want
    /// more than the message.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": self.params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

// ============================================================================
// FAILURE LIST
// ============================================================================

/// Ordered failures for one value. Empty means the value passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// JSON array of messages.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_owned())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

// ============================================================================
// FAILURE MAP
// ============================================================================

/// Failures keyed by record field, in field order.
///
/// Only fields that failed are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    fields: IndexMap<String, ValidationErrors>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `errors` under `field` unless the list is empty.
    pub fn insert(&mut self, field: impl Into<String>, errors: ValidationErrors) {
        if errors.has_errors() {
            self.fields.insert(field.into(), errors);
        }
    }

    pub fn get(&self, field: &str) -> Option<&ValidationErrors> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ValidationErrors> {
        self.fields.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// JSON object of field to message array.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, ValidationErrors);
    type IntoIter = indexmap::map::IntoIter<String, ValidationErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: &'static str, message: &str) -> ValidationError {
        ValidationError::new(code, message)
    }

    #[test]
    fn display_is_the_message() {
        let error = failure("min", "too short").with_field("name");
        assert_eq!(error.to_string(), "too short");
    }

    #[test]
    fn list_json_is_message_array() {
        let errors: ValidationErrors = [failure("min", "too short"), failure("email", "bad \"mail\"")]
            .into_iter()
            .collect();
        insta::assert_snapshot!(errors.to_json(), @r#"["too short","bad \"mail\""]"#);
        assert_eq!(ValidationErrors::new().to_json(), "[]");
    }

    #[test]
    fn map_skips_empty_lists() {
        let mut map = FieldErrors::new();
        map.insert("ok", ValidationErrors::new());
        map.insert("name", [failure("min", "too short")].into_iter().collect());
        assert_eq!(map.len(), 1);
        assert!(!map.contains("ok"));
        insta::assert_snapshot!(map.to_json(), @r#"{"name":["too short"]}"#);
    }

    #[test]
    fn structured_json_keeps_metadata() {
        let error = failure("in", "must be one of a, b")
            .with_params(["a", "b"])
            .with_field("kind");
        insta::assert_json_snapshot!(error.to_json_value(), @r#"
        {
          "code": "in",
          "field": "kind",
          "message": "must be one of a, b",
          "params": [
            "a",
            "b"
          ]
        }
        "#);
    }
}
