//! Rule specification grammar.
//!
//! ```text
//! spec   = clause ("|" clause)*
//! clause = name [":" params]
//! params = value ("," value)*      (except `regex`, which takes one opaque value)
//! ```
//!
//! Nothing is trimmed: whitespace around names and parameters is kept as
//! written.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule whose parameter text is never split on commas.
const OPAQUE_RULE: &str = "regex";

/// One parsed clause: a rule name and its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
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

    /// Parses a single clause.
    pub fn parse_clause(clause: &str) -> Self {
        match clause.split_once(':') {
            None => Self::new(clause),
            Some((name, rest)) if name == OPAQUE_RULE => Self::new(name).with_params([rest]),
            Some((name, rest)) => Self::new(name).with_params(rest.split(',')),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

/// Splits a rule specification into rules, in order.
///
/// The empty string has no rules. An empty clause (`"a||b"`, a trailing `|`)
/// becomes a rule with an empty name, which the resolver rejects.
pub fn parse(spec: &str) -> Vec<Rule> {
    if spec.is_empty() {
        return Vec::new();
    }
    spec.split('|').map(Rule::parse_clause).collect()
}
