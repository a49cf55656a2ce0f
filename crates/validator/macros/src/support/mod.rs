//! Attribute parsing, diagnostics and syn helpers shared by the derives.

pub mod attrs;
pub mod diag;
pub mod utils;
