//! Failure message templates.
//!
//! Templates use positional `{0}`, `{1}`, ... placeholders filled from the
//! rule parameters. A rule without a template gets a generic message.

use std::collections::HashMap;

const DEFAULTS: &[(&str, &str)] = &[
    ("required", "is required"),
    ("empty", "must be empty"),
    ("email", "must be a valid email address"),
    ("url", "must be a valid url"),
    ("accepted", "must be accepted"),
    ("alpha", "must contain only letters"),
    ("alpha_numeric", "must contain only letters and digits"),
    ("alpha_under", "must contain only letters and underscores"),
    ("alpha_dash", "must contain only letters and dashes"),
    ("ascii", "must contain only ascii characters"),
    ("int", "must be an integer"),
    ("float", "must be a number"),
    ("json", "must be a valid json"),
    ("ip", "must be a valid ip address"),
    ("ipv4", "must be a valid ipv4 address"),
    ("ipv6", "must be a valid ipv6 address"),
    ("time", "must be a valid time in hh:mm:ss format"),
    ("upper_case", "must be in upper case"),
    ("lower_case", "must be in lower case"),
    ("country_code2", "must be a valid country code in AA format"),
    ("country_code3", "must be a valid country code in AAA format"),
    ("currency_code", "must be a valid currency code"),
    ("language_code2", "must be a valid language code in aa format"),
    ("language_code3", "must be a valid language code in aaa format"),
    ("credit_card", "must be a valid credit card number"),
    (
        "password",
        "must be at least 8 characters with lower and upper case letters and digits",
    ),
    ("min", "must be greater or equal of {0}"),
    ("max", "must be lower or equal of {0}"),
    ("len", "must have length {0}"),
    ("gt", "must be greater than {0}"),
    ("lt", "must be lower than {0}"),
    ("in", "must be one of {0}"),
    ("not_in", "must not be one of {0}"),
    ("date", "must be a valid date in {0} format"),
    ("date_gte", "must be a date after or equal to {1}"),
    ("date_lte", "must be a date before or equal to {1}"),
    ("date_gt", "must be a date after {1}"),
    ("date_lt", "must be a date before {1}"),
    ("regex", "must match {0}"),
    ("contains", "must contain {0}"),
    ("has_prefix", "must start with {0}"),
    ("has_suffix", "must end with {0}"),
    ("has_keys", "must have keys {0}"),
    ("has_only_keys", "must have only keys {0}"),
    ("file_exists", "must be an existing file"),
];

/// Rule name to message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    templates: HashMap<String, String>,
}

impl Default for MessageTable {
    fn default() -> Self {
        Self {
            templates: DEFAULTS
                .iter()
                .map(|(rule, template)| ((*rule).to_owned(), (*template).to_owned()))
                .collect(),
        }
    }
}

impl MessageTable {
    /// A table with no templates; every rule renders the generic message.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(String::as_str)
    }

    pub fn insert(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    /// Adds or replaces templates in bulk.
    pub fn update<I, K, V>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (rule, template) in templates {
            self.insert(rule, template);
        }
    }

    /// Renders the message for `rule`, substituting `{i}` with `params[i]`.
    /// Placeholders without a matching parameter are left as written.
    pub fn render(&self, rule: &str, params: &[String]) -> String {
        match self.get(rule) {
            Some(template) => interpolate(template, params),
            None => format!("validation by {rule} not pass."),
        }
    }
}

fn interpolate(template: &str, params: &[String]) -> String {
    let mut out = template.to_owned();
    for (i, param) in params.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), param);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_positional_params() {
        let table = MessageTable::default();
        assert_eq!(
            table.render("min", &["3".into()]),
            "must be greater or equal of 3"
        );
        assert_eq!(
            table.render("date_gt", &["02-01-2006".into(), "today".into()]),
            "must be a date after today"
        );
    }

    #[test]
    fn unknown_rule_gets_generic_message() {
        assert_eq!(
            MessageTable::default().render("even", &[]),
            "validation by even not pass."
        );
    }

    #[test]
    fn missing_params_leave_placeholder() {
        let mut table = MessageTable::empty();
        table.insert("between", "between {0} and {1}");
        assert_eq!(table.render("between", &["1".into()]), "between 1 and {1}");
    }

    #[test]
    fn update_replaces_templates() {
        let mut table = MessageTable::default();
        table.update([("min", "at least {0}"), ("even", "must be even")]);
        assert_eq!(table.render("min", &["2".into()]), "at least 2");
        assert_eq!(table.get("even"), Some("must be even"));
    }
}
