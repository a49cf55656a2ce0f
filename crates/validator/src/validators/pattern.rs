//! Text shape validators: character classes, caller patterns and well-known
//! formats.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use chrono::NaiveTime;
use parking_lot::Mutex;
use regex::Regex;

use super::{BuiltinTable, Check, insert};
use crate::error::{CheckResult, Error};
use crate::value::Value;

/// Compiled `regex` rule patterns kept around between calls.
const MAX_PATTERN_CACHE: usize = 256;

// Built-in patterns are literals; compiling them cannot fail.
static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[a-zA-Z]+$").expect("valid regex"));
static ALPHA_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9]+$").expect("valid regex"));
static ALPHA_UNDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z_]+$").expect("valid regex"));
static ALPHA_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z-]+$").expect("valid regex"));
static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[-+]?[0-9]+$").expect("valid regex"));
static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+\.[0-9]+$").expect("valid regex"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$",
    )
    .expect("valid regex")
});

static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "alpha", |v, c| matches(&ALPHA, v, c));
    insert(table, "alpha_numeric", |v, c| matches(&ALPHA_NUMERIC, v, c));
    insert(table, "alpha_under", |v, c| matches(&ALPHA_UNDER, v, c));
    insert(table, "alpha_dash", |v, c| matches(&ALPHA_DASH, v, c));
    insert(table, "int", |v, c| matches(&INT, v, c));
    insert(table, "float", |v, c| matches(&FLOAT, v, c));
    insert(table, "email", |v, c| matches(&EMAIL, v, c));
    insert(table, "regex", regex);
    insert(table, "ascii", |v, c| text(v, c, |s| !s.is_empty() && s.is_ascii()));
    insert(table, "upper_case", |v, c| text(v, c, |s| s == s.to_uppercase()));
    insert(table, "lower_case", |v, c| text(v, c, |s| s == s.to_lowercase()));
    insert(table, "contains", |v, c| with_param(v, c, |s, p| s.contains(p)));
    insert(table, "has_prefix", |v, c| with_param(v, c, |s, p| s.starts_with(p)));
    insert(table, "has_suffix", |v, c| with_param(v, c, |s, p| s.ends_with(p)));
    insert(table, "json", |v, c| text(v, c, is_json));
    insert(table, "time", |v, c| text(v, c, is_time));
    insert(table, "url", |v, c| text(v, c, is_url));
    insert(table, "ip", |v, c| text(v, c, |s| s.parse::<IpAddr>().is_ok()));
    insert(table, "ipv4", |v, c| text(v, c, |s| s.parse::<Ipv4Addr>().is_ok()));
    insert(table, "ipv6", |v, c| text(v, c, is_ipv6));
}

fn text(value: &Value, check: &Check<'_>, passes: fn(&str) -> bool) -> CheckResult {
    let s = check.text(value)?;
    check.ensure(passes(s))
}

fn with_param(value: &Value, check: &Check<'_>, passes: fn(&str, &str) -> bool) -> CheckResult {
    let s = check.text(value)?;
    let needle = check.param(0)?;
    check.ensure(passes(s, needle))
}

fn matches(re: &Regex, value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    check.ensure(re.is_match(s))
}

/// Full-string match against the caller's pattern.
fn regex(value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    let re = compiled(check.param(0)?)?;
    check.ensure(re.is_match(s))
}

fn compiled(pattern: &str) -> Result<Regex, Error> {
    let mut cache = PATTERN_CACHE.lock();
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }

    let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;

    if cache.len() >= MAX_PATTERN_CACHE {
        if let Some(key) = cache.keys().next().cloned() {
            cache.remove(&key);
        }
    }
    cache.insert(pattern.to_owned(), re.clone());
    Ok(re)
}

fn is_json(s: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(s).is_ok()
}

fn is_time(s: &str) -> bool {
    NaiveTime::parse_from_str(s, "%H:%M:%S").is_ok()
}

/// Absolute URL with a non-empty host.
fn is_url(s: &str) -> bool {
    url::Url::parse(s).is_ok_and(|u| u.host_str().is_some_and(|h| !h.is_empty()))
}

/// IPv6 text that is not an IPv4-mapped address.
fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>()
        .is_ok_and(|ip| ip.to_ipv4_mapped().is_none())
}
