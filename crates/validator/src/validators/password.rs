//! `password`: at least 8 chars with a lowercase letter, an uppercase letter
//! and a digit.

use super::{BuiltinTable, Check, insert};
use crate::error::CheckResult;
use crate::value::Value;

const MIN_PASSWORD_LEN: usize = 8;

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "password", password);
}

fn password(value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    check.ensure(
        s.chars().count() >= MIN_PASSWORD_LEN
            && s.chars().any(|c| c.is_ascii_lowercase())
            && s.chars().any(|c| c.is_ascii_uppercase())
            && s.chars().any(|c| c.is_ascii_digit()),
    )
}

#[cfg(test)]
mod tests {
    use crate::validators::testing::passes;
    use rstest::rstest;

    #[rstest]
    #[case("Passw0rd", true)]
    #[case("Pa1", false)]
    #[case("password1", false)]
    #[case("PASSWORD1", false)]
    #[case("Password", false)]
    #[case("Пароль1Aa", true)]
    fn password_rules(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(passes("password", &[], input), ok);
    }
}
