//! Fatal engine errors
//!
//! These describe integration mistakes (a misspelled rule, a rule applied to a
//! value kind it cannot handle, a malformed parameter). They abort the call and
//! are never folded into the failure list. Soft failures live in
//! [`crate::failure`].

use crate::failure::ValidationError;
use crate::value::Kind;

/// Result alias used across the engine.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Outcome of a single check: `Ok(())`, a soft failure, or a fatal error.
pub type CheckResult = Result<(), CheckError>;

/// A configuration or programmer error that aborts validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The rule name is not a validator, an option or an action.
    #[error("unknown rule `{0}`: not a validator, option or action")]
    UnknownRule(String),

    /// A rule or action was applied to a value kind it does not accept.
    #[error("rule `{rule}` expects {expected}, got {found}")]
    TypeMismatch {
        rule: String,
        expected: &'static str,
        found: Kind,
    },

    /// A positional parameter the rule needs is absent.
    #[error("rule `{rule}` is missing parameter #{index}")]
    MissingParam { rule: String, index: usize },

    /// A parameter is present but unusable.
    #[error("rule `{rule}` has invalid parameter `{param}`: {reason}")]
    InvalidParam {
        rule: String,
        param: String,
        reason: String,
    },

    /// A caller-supplied regular expression does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Engine settings could not be loaded.
    #[error("invalid settings: {0}")]
    Settings(String),
}

impl Error {
    pub(crate) fn mismatch(rule: &str, expected: &'static str, found: Kind) -> Self {
        Self::TypeMismatch {
            rule: rule.to_owned(),
            expected,
            found,
        }
    }
}

/// Error channel of a validator: either the value is invalid or the check
/// itself cannot run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Invalid(ValidationError),
    #[error(transparent)]
    Fatal(Error),
}

impl From<ValidationError> for CheckError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl From<Error> for CheckError {
    fn from(err: Error) -> Self {
        Self::Fatal(err)
    }
}
