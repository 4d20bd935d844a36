//! Template Value Coercion
//!
//! Loose conversions applied to template arguments before formatting.
//! Template data arrives as JSON, and a reference the context cannot
//! resolve arrives as `None` ("undefined"). The rules mirror the dashboard's
//! browser-side helpers so server-rendered pages print the same text:
//!
//! | Input        | Truthy | Number          | String            |
//! |--------------|--------|-----------------|-------------------|
//! | undefined    | no     | NaN             | `undefined`       |
//! | `null`       | no     | 0               | `null`            |
//! | `true`       | yes    | 1               | `true`            |
//! | `0`, NaN     | no     | itself          | `0` / `NaN`       |
//! | `""`         | no     | 0               | empty             |
//! | `"12.5"`     | yes    | 12.5            | `12.5`            |
//! | `[1, 2]`     | yes    | NaN             | `1,2`             |
//! | `{}`         | yes    | NaN             | `[object Object]` |

use serde_json::Value;

use super::number::number_to_string;

/// Placeholder text for object values.
const OBJECT_TEXT: &str = "[object Object]";

/// Whether a template argument counts as "set".
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Convert a template argument to a number, yielding NaN when it has no
/// numeric reading.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => string_to_number(s),
        Some(array @ Value::Array(_)) => string_to_number(&to_display_string(Some(array))),
    }
}

/// Convert a template argument to a number truncated toward zero.
///
/// NaN collapses to 0; infinities are kept so callers can clamp them.
pub fn to_integer(value: Option<&Value>) -> f64 {
    let number = to_number(value);
    if number.is_nan() {
        0.0
    } else {
        number.trunc()
    }
}

/// Convert a template argument to the text a template would print for it.
pub fn to_display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        // Integers print exactly, even past 2^53.
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.to_string(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map_or_else(|| n.to_string(), number_to_string),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => OBJECT_TEXT.to_string(),
    }
}

/// Parse numeric text the way a template would.
///
/// Surrounding whitespace is ignored and empty text is zero. Accepts
/// `Infinity` with an optional sign, unsigned `0x`/`0o`/`0b` integer
/// literals, and decimal literals with an optional exponent.
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(trimmed) {
        return parse_radix_integer(&trimmed[2..], radix);
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    let is_decimal_literal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

fn radix_prefix(text: &str) -> Option<u32> {
    let prefix = text.get(..2)?;
    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
        })
        .unwrap_or(f64::NAN)
}
