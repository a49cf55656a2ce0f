//! # tagcheck-validator
//!
//! Declarative value validation driven by compact rule specifications.
//!
//! A specification such as `"required|min:3|max:20|alpha"` is split into
//! rules, each name resolved to a validator, an option or an action, and the
//! value checked against every validator in order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagcheck_validator::prelude::*;
//!
//! let errors = validate(&"jo", ["required|min:3|alpha"])?;
//! assert_eq!(errors.messages(), vec!["must be greater or equal of 3"]);
//!
//! // Empty values pass unless `required` is given.
//! assert!(validate(&"", ["email"])?.is_empty());
//! ```
//!
//! ## Records
//!
//! ```rust,ignore
//! use tagcheck_validator::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[tag(valid = "required|min:2")]
//!     name: String,
//!     #[tag(valid = "email")]
//!     email: String,
//! }
//!
//! let errors = validate_record(&signup, &[] as &[&str])?;
//! ```
//!
//! ## Namespaces
//!
//! Rule names resolve against built-in validators, application validators,
//! options (`required`, `ignore`, `lazy` and registered names) and actions
//! (`trim`, `lower`, `upper`, `clear` and registered names), in that order.
//! See [`registry`] for registration.

// Validation failures carry their code, message, field and parameters; they
// are returned on every failing check and are not boxed.
#![allow(clippy::result_large_err)]

pub mod actions;
pub mod config;
pub mod engine;
pub mod error;
pub mod failure;
pub mod is;
mod macros;
pub mod messages;
pub mod metrics;
pub mod options;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rule;
pub mod validators;
pub mod value;

pub use actions::Action;
pub use config::{Settings, configure_from};
pub use engine::{Arg, Plan, by, validate_with};
pub use error::{CheckError, CheckResult, Error, Result};
pub use failure::{FieldErrors, ValidationError, ValidationErrors};
pub use options::{OptionSet, RuleOption};
pub use record::{Field, Record, validate_record_with};
pub use registry::Registry;
pub use rule::Rule;
pub use validators::{Check, Validator};
pub use value::{Kind, ToValue, Value};

#[cfg(feature = "derive")]
pub use tagcheck_validator_macros::Record;

/// Validates `value` against `args` using the global registry.
///
/// Returns the failures in rule order; an empty list means the value passed.
/// Unknown rule names, malformed parameters and values a rule cannot inspect
/// are returned as [`Error`].
pub fn validate<T, I>(value: &T, args: I) -> Result<ValidationErrors>
where
    T: ToValue + ?Sized,
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    validate_with(&registry::global(), value.to_value(), args)
}

/// Validates every field of `record` using the global registry.
///
/// `tags` selects which field tags to read; an empty slice reads the default
/// tag.
pub fn validate_record<R, S>(record: &R, tags: &[S]) -> Result<FieldErrors>
where
    R: Record + ?Sized,
    S: AsRef<str>,
{
    validate_record_with(&registry::global(), record, tags)
}
