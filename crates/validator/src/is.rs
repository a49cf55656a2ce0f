//! Typed constructors for built-in rules and options.
//!
//! Each constructor builds the same [`Rule`] the parser would produce for the
//! equivalent clause, so `is::min(3)` and `"min:3"` are interchangeable.
//!
//! ```rust,ignore
//! use tagcheck_validator::{is, rules, validate};
//!
//! let errors = validate(&"bob", rules![is::required(), is::min(3), is::alpha()])?;
//! assert!(errors.is_empty());
//! ```

use std::fmt::Display;

use crate::options::RuleOption;
use crate::rule::Rule;

pub fn required() -> RuleOption {
    RuleOption::Required
}

pub fn ignore() -> RuleOption {
    RuleOption::Ignore
}

pub fn lazy() -> RuleOption {
    RuleOption::Lazy
}

macro_rules! plain_rules {
    ($($(#[$meta:meta])* $fn_name:ident => $rule:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $fn_name() -> Rule {
                Rule::new($rule)
            }
        )+
    };
}

plain_rules! {
    empty => "empty";
    email => "email";
    url => "url";
    accepted => "accepted";
    alpha => "alpha";
    alpha_numeric => "alpha_numeric";
    alpha_under => "alpha_under";
    alpha_dash => "alpha_dash";
    ascii => "ascii";
    int => "int";
    float => "float";
    json => "json";
    ip => "ip";
    ipv4 => "ipv4";
    ipv6 => "ipv6";
    /// `HH:MM:SS`.
    time => "time";
    upper_case => "upper_case";
    lower_case => "lower_case";
    country_code2 => "country_code2";
    country_code3 => "country_code3";
    currency_code => "currency_code";
    language_code2 => "language_code2";
    language_code3 => "language_code3";
    credit_card => "credit_card";
    password => "password";
    file_exists => "file_exists";
}

fn with_one(name: &str, param: impl Display) -> Rule {
    Rule::new(name).with_params([param.to_string()])
}

fn with_list<I>(name: &str, items: I) -> Rule
where
    I: IntoIterator,
    I::Item: Display,
{
    Rule::new(name).with_params(items.into_iter().map(|item| item.to_string()))
}

pub fn min(bound: impl Display) -> Rule {
    with_one("min", bound)
}

pub fn max(bound: impl Display) -> Rule {
    with_one("max", bound)
}

pub fn gt(bound: impl Display) -> Rule {
    with_one("gt", bound)
}

pub fn lt(bound: impl Display) -> Rule {
    with_one("lt", bound)
}

pub fn len(length: usize) -> Rule {
    with_one("len", length)
}

/// `in`: the value equals one of `items`.
pub fn one_of<I>(items: I) -> Rule
where
    I: IntoIterator,
    I::Item: Display,
{
    with_list("in", items)
}

/// `not_in`: the value equals none of `items`.
pub fn none_of<I>(items: I) -> Rule
where
    I: IntoIterator,
    I::Item: Display,
{
    with_list("not_in", items)
}

/// Full-string match. The pattern is kept whole, commas included.
pub fn regex(pattern: impl Into<String>) -> Rule {
    Rule::new("regex").with_params([pattern.into()])
}

pub fn contains(needle: impl Into<String>) -> Rule {
    Rule::new("contains").with_params([needle.into()])
}

pub fn has_prefix(prefix: impl Into<String>) -> Rule {
    Rule::new("has_prefix").with_params([prefix.into()])
}

pub fn has_suffix(suffix: impl Into<String>) -> Rule {
    Rule::new("has_suffix").with_params([suffix.into()])
}

pub fn has_keys<I>(keys: I) -> Rule
where
    I: IntoIterator,
    I::Item: Display,
{
    with_list("has_keys", keys)
}

pub fn has_only_keys<I>(keys: I) -> Rule
where
    I: IntoIterator,
    I::Item: Display,
{
    with_list("has_only_keys", keys)
}

pub fn date(layout: impl Into<String>) -> Rule {
    Rule::new("date").with_params([layout.into()])
}

fn date_rule(name: &str, layout: impl Into<String>, target: impl Into<String>) -> Rule {
    Rule::new(name).with_params([layout.into(), target.into()])
}

pub fn date_gte(layout: impl Into<String>, target: impl Into<String>) -> Rule {
    date_rule("date_gte", layout, target)
}

pub fn date_lte(layout: impl Into<String>, target: impl Into<String>) -> Rule {
    date_rule("date_lte", layout, target)
}

pub fn date_gt(layout: impl Into<String>, target: impl Into<String>) -> Rule {
    date_rule("date_gt", layout, target)
}

pub fn date_lt(layout: impl Into<String>, target: impl Into<String>) -> Rule {
    date_rule("date_lt", layout, target)
}
