//! Common imports.
//!
//! ```rust,ignore
//! use tagcheck_validator::prelude::*;
//!
//! let errors = validate(&42, rules![is::required(), is::max(40)])?;
//! ```

pub use crate::actions::Action;
pub use crate::engine::{Arg, by};
pub use crate::error::{CheckError, CheckResult, Error};
pub use crate::failure::{FieldErrors, ValidationError, ValidationErrors};
pub use crate::is;
pub use crate::options::RuleOption;
pub use crate::record::{Field, Record};
pub use crate::rule::Rule;
pub use crate::rules;
pub use crate::validators::{Check, Validator};
pub use crate::value::{ToValue, Value};
pub use crate::{validate, validate_record};

#[cfg(feature = "derive")]
pub use tagcheck_validator_macros::Record;
