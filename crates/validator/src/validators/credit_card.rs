//! `credit_card`: Luhn checksum over a 13 to 19 digit number.

use std::ops::RangeInclusive;

use super::{BuiltinTable, Check, insert};
use crate::error::CheckResult;
use crate::value::Value;

const CARD_LENGTH: RangeInclusive<usize> = 13..=19;

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "credit_card", credit_card);
}

fn credit_card(value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    check.ensure(luhn(s))
}

/// Luhn checksum. Anything other than ASCII digits, or a length outside
/// 13..=19, fails.
pub fn luhn(number: &str) -> bool {
    if !CARD_LENGTH.contains(&number.len()) {
        return false;
    }

    let mut sum = 0;
    for (i, byte) in number.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(byte - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::testing::passes;
    use rstest::rstest;

    #[rstest]
    #[case::visa("4111111111111111", true)]
    #[case::mastercard("5500000000000004", true)]
    #[case::amex("378282246310005", true)]
    #[case::checksum("4111111111111112", false)]
    #[case::spaced("4111 1111 1111 1111", false)]
    #[case::spaced_mc("5500 0000 0000 0004", false)]
    #[case::short("411111111111", false)]
    #[case::long("41111111111111111111", false)]
    #[case::letters("4111111111111a11", false)]
    fn luhn_cases(#[case] number: &str, #[case] ok: bool) {
        assert_eq!(luhn(number), ok);
        assert_eq!(passes("credit_card", &[], number), ok);
    }
}
