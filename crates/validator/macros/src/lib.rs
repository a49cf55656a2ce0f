//! # tagcheck-validator-macros
//!
//! `#[derive(Record)]` for `tagcheck-validator`. Use it through the
//! re-export in `tagcheck_validator`.
//!
//! ```ignore
//! use tagcheck_validator::Record;
//!
//! #[derive(Record)]
//! pub struct Signup {
//!     #[tag(valid = "required|min:2", strict = "alpha")]
//!     name: String,
//!
//!     #[tag(valid = "email")]
//!     email: String,
//!
//!     #[tag(skip)]
//!     session: Session,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Only structs with named fields are accepted.
///
/// # Field attributes
///
/// - `#[tag(name = "spec", ...)]` - Declares the rule spec for each tag name.
///   Several `tag` attributes on one field are merged.
/// - `#[tag(skip)]` - Leaves the field out of the record.
///
/// Fields without a `tag` attribute are still listed, with no rules, so they
/// always pass. Every listed field's type must implement `ToValue`.
#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
