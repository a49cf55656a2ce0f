//! Date rules: `date`, `date_gte`, `date_lte`, `date_gt`, `date_lt`.
//!
//! Layouts are written against the reference time `Mon Jan 2 15:04:05 MST
//! 2006` (`02-01-2006`, `2006-01-02 15:04:05`, ...) and translated to chrono
//! format strings. A layout that already contains `%` is used as a chrono
//! format string directly. Fields a layout leaves out default to one (month,
//! day) or zero (year, clock), and the `Z07:00`/`Z0700` offsets also accept
//! a literal `Z` for UTC.
//!
//! Comparison targets are either a literal date in the same layout or a
//! placeholder resolved against the local clock: `now`, `today`,
//! `yesterday`, `tomorrow`, or modifiers such as `-18Y -3h +22s`
//! (units `Y`, `M`, `D`, `h`, `m`, `s`). Resolved targets are formatted with
//! the layout and parsed back, so they compare at the layout's precision.

use std::cmp::Ordering;
use std::fmt::Write as _;
use std::sync::LazyLock;

use chrono::format::{ParseResult, Parsed, StrftimeItems};
use chrono::{
    DateTime, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone,
};
use regex::Regex;

use super::{BuiltinTable, Check, insert};
use crate::error::CheckResult;
use crate::value::Value;

static MODIFIERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-+]?\d+[YMDhms]\s*)+$").expect("valid regex"));
static MODIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([-+]?\d+)([YMDhms])").expect("valid regex"));

/// Reference-layout tokens, longest first so prefixes never shadow them.
const LAYOUT_TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    (".000000000", "%.9f"),
    (".999999999", "%.f"),
    (".000000", "%.6f"),
    (".999999", "%.f"),
    ("-07:00", "%:z"),
    ("Z07:00", "%:z"),
    ("-0700", "%z"),
    ("Z0700", "%z"),
    (".000", "%.3f"),
    (".999", "%.f"),
    ("2006", "%Y"),
    ("Jan", "%b"),
    ("Mon", "%a"),
    ("MST", "%Z"),
    ("002", "%j"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("15", "%H"),
    ("_2", "%e"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
];

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "date", date);
    insert(table, "date_gte", |v, c| compare(v, c, Ordering::is_ge));
    insert(table, "date_lte", |v, c| compare(v, c, Ordering::is_le));
    insert(table, "date_gt", |v, c| compare(v, c, Ordering::is_gt));
    insert(table, "date_lt", |v, c| compare(v, c, Ordering::is_lt));
}

fn date(value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    let layout = Layout::new(check.param(0)?);
    check.ensure(layout.parse(s).is_some())
}

fn compare(value: &Value, check: &Check<'_>, accept: fn(Ordering) -> bool) -> CheckResult {
    let s = check.text(value)?;
    let layout = Layout::new(check.param(0)?);
    let target = check.param(1)?;

    let passed = match (layout.parse(s), layout.resolve_target(target)) {
        (Some(date), Some(target)) => accept(date.cmp(&target)),
        _ => false,
    };
    check.ensure(passed)
}

/// Translates a reference layout into a chrono format string.
pub fn translate_layout(layout: &str) -> String {
    if layout.contains('%') {
        return layout.to_owned();
    }

    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;
    'scan: while let Some(c) = rest.chars().next() {
        for (token, spec) in LAYOUT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(spec);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// A translated layout, plus the UTC offset a trailing `Z` stands for when
/// the layout used `Z07:00` or `Z0700`.
struct Layout {
    format: String,
    zulu: Option<&'static str>,
}

impl Layout {
    fn new(layout: &str) -> Self {
        let zulu = if layout.contains('%') {
            None
        } else if layout.contains("Z07:00") {
            Some("+00:00")
        } else if layout.contains("Z0700") {
            Some("+0000")
        } else {
            None
        };
        Self {
            format: translate_layout(layout),
            zulu,
        }
    }

    fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        let rewritten = self
            .zulu
            .and_then(|utc| input.strip_suffix('Z').map(|head| format!("{head}{utc}")));
        parse_date(rewritten.as_deref().unwrap_or(input), &self.format)
    }

    fn resolve_target(&self, target: &str) -> Option<NaiveDateTime> {
        match relative_date(target, Local::now()) {
            Some(resolved) => {
                let mut text = String::new();
                write!(text, "{}", resolved.format(&self.format)).ok()?;
                parse_date(&text, &self.format)
            }
            None => self.parse(target),
        }
    }
}

/// Parses `input` with a chrono format. Fields the layout leaves out default
/// to zero, or to one where zero is impossible, so `01/2006` reads as the
/// first of the month and `15:04` as a time on day zero. An offset, when
/// present, is folded into UTC.
fn parse_date(input: &str, format: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, input, StrftimeItems::new(format)).ok()?;
    fill_missing(&mut parsed).ok()?;

    let offset = parsed.offset().unwrap_or(0);
    let local = parsed.to_naive_datetime_with_offset(offset).ok()?;
    local.checked_sub_signed(TimeDelta::try_seconds(i64::from(offset))?)
}

fn fill_missing(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.timestamp().is_some() {
        return Ok(());
    }

    let week_based = parsed.isoyear().is_some()
        || parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    if !week_based {
        if parsed.year().is_none()
            && parsed.year_div_100().is_none()
            && parsed.year_mod_100().is_none()
        {
            parsed.set_year(0)?;
        }
        if parsed.ordinal().is_none() {
            if parsed.month().is_none() {
                parsed.set_month(1)?;
            }
            if parsed.day().is_none() {
                parsed.set_day(1)?;
            }
        }
    }

    if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
        parsed.set_hour(0)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

/// Resolves a placeholder against `now`. Returns `None` when `placeholder`
/// is not a placeholder (it is then read as a literal date).
pub fn relative_date<Tz: TimeZone>(placeholder: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    match placeholder {
        "now" => Some(now),
        "today" => midnight(&now, 0),
        "yesterday" => midnight(&now, -1),
        "tomorrow" => midnight(&now, 1),
        other if MODIFIERS.is_match(other) => apply_modifiers(other, now),
        _ => None,
    }
}

fn midnight<Tz: TimeZone>(now: &DateTime<Tz>, day_offset: i64) -> Option<DateTime<Tz>> {
    let day = shift_days(now.date_naive(), day_offset)?;
    now.timezone()
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(magnitude)
    } else {
        date.checked_add_days(magnitude)
    }
}

/// Same-unit modifiers accumulate. Calendar units apply before clock units.
fn apply_modifiers<Tz: TimeZone>(spec: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
    let (mut months, mut days, mut seconds) = (0_i64, 0_i64, 0_i64);
    for caps in MODIFIER.captures_iter(spec) {
        let amount: i64 = caps[1].parse().ok()?;
        match &caps[2] {
            "Y" => months = months.checked_add(amount.checked_mul(12)?)?,
            "M" => months = months.checked_add(amount)?,
            "D" => days = days.checked_add(amount)?,
            "h" => seconds = seconds.checked_add(amount.checked_mul(3600)?)?,
            "m" => seconds = seconds.checked_add(amount.checked_mul(60)?)?,
            _ => seconds = seconds.checked_add(amount)?,
        }
    }

    let span = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let shifted = if months < 0 {
        now.checked_sub_months(span)?
    } else {
        now.checked_add_months(span)?
    };
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        shifted.checked_sub_days(magnitude)?
    } else {
        shifted.checked_add_days(magnitude)?
    };
    shifted.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheckError, Error};
    use crate::validators::testing::{passes, run};
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;

    fn at(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[rstest]
    #[case("02-01-2006", "%d-%m-%Y")]
    #[case("2006-01-02 15:04:05", "%Y-%m-%d %H:%M:%S")]
    #[case("Jan _2 2006", "%b %e %Y")]
    #[case("Monday, 02-Jan-06 15:04:05 MST", "%A, %d-%b-%y %H:%M:%S %Z")]
    #[case("2006-01-02T15:04:05.000Z07:00", "%Y-%m-%dT%H:%M:%S%.3f%:z")]
    #[case("3:04PM", "%-I:%M%p")]
    #[case("%Y/%m/%d", "%Y/%m/%d")]
    fn layouts_translate(#[case] layout: &str, #[case] expected: &str) {
        assert_eq!(translate_layout(layout), expected);
    }

    #[test]
    fn named_placeholders() {
        let now = at("2024-03-10 15:30:00");
        assert_eq!(relative_date("now", now), Some(now));
        assert_eq!(relative_date("today", now), Some(at("2024-03-10 00:00:00")));
        assert_eq!(relative_date("yesterday", now), Some(at("2024-03-09 00:00:00")));
        assert_eq!(relative_date("tomorrow", now), Some(at("2024-03-11 00:00:00")));
    }

    #[rstest]
    #[case("-1D", "2024-03-09 15:30:00")]
    #[case("+1D", "2024-03-11 15:30:00")]
    #[case("-18Y", "2006-03-10 15:30:00")]
    #[case("-18Y -3h +22s", "2006-03-10 12:30:22")]
    #[case("1M 30m", "2024-04-10 16:00:00")]
    #[case("-1D -1D", "2024-03-08 15:30:00")]
    fn modifiers(#[case] spec: &str, #[case] expected: &str) {
        let now = at("2024-03-10 15:30:00");
        assert_eq!(relative_date(spec, now), Some(at(expected)));
    }

    #[test]
    fn month_arithmetic_clamps_to_month_end() {
        let now = at("2024-01-31 00:00:00");
        assert_eq!(relative_date("+1M", now), Some(at("2024-02-29 00:00:00")));
    }

    #[test]
    fn non_placeholders_are_literal() {
        let now = at("2024-03-10 15:30:00");
        assert_eq!(relative_date("10-03-2024", now), None);
        assert_eq!(relative_date("-1W", now), None);
        assert_eq!(relative_date("", now), None);
    }

    #[test]
    fn placeholders_keep_timezone() {
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 10, 1, 0, 0).unwrap();
        let today = relative_date("today", now).unwrap();
        assert_eq!(today, tz.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    }

    #[rstest]
    #[case("31-12-2023", true)]
    #[case("31-02-2023", false)]
    #[case("2023-12-31", false)]
    fn date_rule(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(passes("date", &["02-01-2006"], input), ok);
    }

    #[test]
    fn date_rule_with_time_layout() {
        assert!(passes("date", &["2006-01-02 15:04:05"], "2024-03-10 08:05:00"));
        assert!(passes("date", &["15:04"], "08:05"));
        assert!(!passes("date", &["15:04"], "8 o'clock"));
    }

    #[rstest]
    #[case::month_and_year("01/2006", "03/2024", true)]
    #[case::bad_month("01/2006", "13/2024", false)]
    #[case::year_only("2006", "2024", true)]
    #[case::year_only_text("2006", "soon", false)]
    #[case::month_name("Jan 2006", "Mar 2024", true)]
    #[case::day_left_over("Jan 2006", "Mar 10 2024", false)]
    fn layouts_without_day_or_month(#[case] layout: &str, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(passes("date", &[layout], input), ok);
    }

    #[test]
    fn missing_day_defaults_to_the_first() {
        let layout = Layout::new("01/2006");
        assert_eq!(layout.parse("03/2024"), Some(at("2024-03-01 00:00:00").naive_utc()));
        assert!(passes("date_lt", &["01/2006", "04/2024"], "03/2024"));
        assert!(!passes("date_gt", &["2006", "2024"], "2024"));
    }

    #[rstest]
    #[case::zulu("2006-01-02T15:04:05Z07:00", "2024-03-10T08:00:00Z", true)]
    #[case::colon_offset("2006-01-02T15:04:05Z07:00", "2024-03-10T10:00:00+02:00", true)]
    #[case::compact_zulu("2006-01-02T15:04:05Z0700", "2024-03-10T08:00:00Z", true)]
    #[case::compact_offset("2006-01-02T15:04:05Z0700", "2024-03-10T10:00:00+0200", true)]
    #[case::numeric_layout_rejects_zulu("2006-01-02T15:04:05-07:00", "2024-03-10T08:00:00Z", false)]
    fn zulu_layouts_accept_literal_z(#[case] layout: &str, #[case] input: &str, #[case] ok: bool) {
        assert_eq!(passes("date", &[layout], input), ok);
    }

    #[test]
    fn zulu_and_offset_compare_in_utc() {
        let layout = "2006-01-02T15:04:05Z07:00";
        assert_eq!(
            Layout::new(layout).parse("2024-03-10T08:00:00Z"),
            Layout::new(layout).parse("2024-03-10T10:00:00+02:00"),
        );
        assert!(passes("date_gte", &[layout, "2024-03-10T10:00:00+02:00"], "2024-03-10T08:00:00Z"));
        assert!(!passes("date_gt", &[layout, "2024-03-10T08:00:00Z"], "2024-03-10T10:00:00+02:00"));
    }

    #[test]
    fn literal_targets() {
        let layout = "02-01-2006";
        assert!(passes("date_gte", &[layout, "01-01-2024"], "01-01-2024"));
        assert!(!passes("date_gt", &[layout, "01-01-2024"], "01-01-2024"));
        assert!(passes("date_lt", &[layout, "01-01-2024"], "31-12-2023"));
        assert!(passes("date_lte", &[layout, "01-01-2024"], "31-12-2023"));
        assert!(!passes("date_lte", &[layout, "01-01-2024"], "02-01-2024"));
    }

    #[test]
    fn relative_targets_against_today() {
        let layout = "02-01-2006";
        let today = Local::now().format("%d-%m-%Y").to_string();
        assert!(passes("date_gte", &[layout, "-1D"], today.as_str()));
        assert!(!passes("date_gte", &[layout, "+1D"], today.as_str()));
        assert!(passes("date_lte", &[layout, "today"], today.as_str()));
        assert!(passes("date_gt", &[layout, "yesterday"], today.as_str()));
        assert!(passes("date_lt", &[layout, "tomorrow"], today.as_str()));
    }

    #[test]
    fn unparsable_inputs_fail_softly() {
        assert!(!passes("date_gte", &["02-01-2006", "-1D"], "not a date"));
        assert!(!passes("date_gte", &["02-01-2006", "someday"], "01-01-2024"));
    }

    #[test]
    fn missing_target_is_fatal() {
        assert!(matches!(
            run("date_gte", &["02-01-2006"], "01-01-2024"),
            Err(CheckError::Fatal(Error::MissingParam { index: 1, .. }))
        ));
    }
}
