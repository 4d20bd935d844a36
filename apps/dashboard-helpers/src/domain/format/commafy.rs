//! Thousands grouping (`commafy`).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::coercion::{is_truthy, to_display_string};

/// Character inserted between digit groups.
pub const GROUP_SEPARATOR: char = ',';

/// Digits per group.
const GROUP_SIZE: usize = 3;

/// Trailing number: an integer run followed by any `.digits` segments.
#[allow(clippy::expect_used)] // Pattern is a constant and always compiles
static TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)((?:\.[0-9]+)*)$").expect("trailing number regex is valid")
});

/// Comma-group the integer part of a template value.
///
/// Falsy values (undefined, `null`, `false`, `0`, NaN, `""`) print as `0`.
/// Anything else is converted to text and grouped with [`group_thousands`].
pub fn commafy(num: Option<&Value>) -> String {
    if !is_truthy(num) {
        return "0".to_string();
    }
    group_thousands(&to_display_string(num))
}

/// Insert [`GROUP_SEPARATOR`] into the number that ends `text`.
///
/// Only the first digit run of the trailing `digits(.digits)*` match is
/// grouped; its `.digits` segments and everything before the match are
/// copied unchanged. Text that does not end in a digit is returned as is.
pub fn group_thousands(text: &str) -> String {
    let Some(caps) = TRAILING_NUMBER.captures(text) else {
        return text.to_string();
    };
    let (Some(integer), Some(fraction)) = (caps.get(1), caps.get(2)) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + integer.len() / GROUP_SIZE);
    out.push_str(&text[..integer.start()]);
    out.push_str(&group_digits(integer.as_str()));
    out.push_str(fraction.as_str());
    out
}

/// Group an ASCII digit run in threes from the right.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(0), "0" ; "zero")]
    #[test_case(json!(null), "0" ; "null")]
    #[test_case(json!(false), "0" ; "false")]
    #[test_case(json!(""), "0" ; "empty string")]
    #[test_case(json!(7), "7" ; "single digit")]
    #[test_case(json!(999), "999" ; "one full group")]
    #[test_case(json!(1000), "1,000" ; "thousand")]
    #[test_case(json!(1_234_567), "1,234,567" ; "million")]
    #[test_case(json!(1_234_567.89), "1,234,567.89" ; "keeps fraction")]
    #[test_case(json!(1_234_567.891), "1,234,567.891" ; "three fraction digits")]
    #[test_case(json!(1234.5678), "1,234.5678" ; "long fraction untouched")]
    #[test_case(json!(-1234), "-1,234" ; "negative")]
    #[test_case(json!(1e21), "1e+21" ; "exponent form has no long run")]
    #[test_case(json!("1234567"), "1,234,567" ; "numeric string")]
    #[test_case(json!("abc1234"), "abc1,234" ; "embedded digits")]
    #[test_case(json!("1234 units"), "1234 units" ; "digits not at end")]
    #[test_case(json!("1234.ab"), "1234.ab" ; "non digit fraction")]
    #[test_case(json!("v1.2 total 1234567"), "v1.2 total 1,234,567" ; "dot before trailing number")]
    #[test_case(json!("x.1234"), "x.1,234" ; "run after stray dot")]
    #[test_case(json!("1.2.3456"), "1.2.3456" ; "dotted segments untouched")]
    #[test_case(json!("build 12345.678"), "build 12,345.678" ; "text then decimal")]
    #[test_case(json!("١٢٣٤"), "١٢٣٤" ; "non ascii digits")]
    #[test_case(json!(true), "true" ; "boolean")]
    fn groups_thousands(input: Value, expected: &str) {
        assert_eq!(commafy(Some(&input)), expected);
    }

    #[test]
    fn undefined_prints_zero() {
        assert_eq!(commafy(None), "0");
    }

    #[test_case("1", "1" ; "one digit")]
    #[test_case("123", "123" ; "full group")]
    #[test_case("1234", "1,234" ; "one separator")]
    #[test_case("123456", "123,456" ; "two full groups")]
    #[test_case("12345678", "12,345,678" ; "partial leading group")]
    fn digit_runs(digits: &str, expected: &str) {
        assert_eq!(group_digits(digits), expected);
    }

    proptest! {
        #[test]
        fn separators_split_integers_into_groups_of_three(n in any::<u64>()) {
            let digits = n.to_string();
            let grouped = commafy(Some(&json!(n)));

            let separators = grouped.matches(GROUP_SEPARATOR).count();
            prop_assert_eq!(separators, (digits.len() - 1) / 3);

            let groups: Vec<&str> = grouped.split(GROUP_SEPARATOR).collect();
            prop_assert!((1..=3).contains(&groups[0].len()));
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
            prop_assert_eq!(grouped.replace(GROUP_SEPARATOR, ""), digits);
        }

        #[test]
        fn grouping_is_repeatable(n in any::<i64>()) {
            let value = json!(n);
            prop_assert_eq!(commafy(Some(&value)), commafy(Some(&value)));
        }
    }
}
