//! Number rendering for template output.
//!
//! `number_to_string` prints the shortest text that reads back as the same
//! `f64`, switching to exponent notation outside `1e-7 < |x| < 1e21`.
//! `to_fixed` prints a fixed count of fractional digits, rounding the exact
//! binary value with ties away from zero.

/// Upper bound on fractional digits accepted by [`to_fixed`].
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Magnitude at which [`to_fixed`] falls back to [`number_to_string`].
const FIXED_NOTATION_LIMIT: f64 = 1e21;

/// Largest decimal exponent printed without exponent notation.
const PLAIN_EXPONENT_MAX: i32 = 21;

/// Smallest decimal exponent printed without exponent notation.
const PLAIN_EXPONENT_MIN: i32 = -6;

/// Enough fractional digits to print any `f64` below the limit exactly
/// (the smallest subnormal needs 1074).
const EXACT_PRECISION: usize = 1100;

/// Render a number as template text.
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x < 0.0 {
        return format!("-{}", number_to_string(-x));
    }

    let (digits, point) = shortest_digits(x);
    let count = digits.len() as i32;

    if count <= point && point <= PLAIN_EXPONENT_MAX {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= PLAIN_EXPONENT_MAX {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if PLAIN_EXPONENT_MIN < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exponent.unsigned_abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    }
}

/// Shortest round-trip digits of a positive finite `x`, and the position of
/// the decimal point relative to the first digit (`x = 0.digits * 10^point`).
fn shortest_digits(x: f64) -> (String, i32) {
    let scientific = format!("{x:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

/// Render a number with exactly `digits` fractional digits.
///
/// `digits` above [`MAX_FRACTION_DIGITS`] is clamped. NaN renders as `NaN`
/// and magnitudes of `1e21` or more (including infinities) render as
/// [`number_to_string`] would.
pub fn to_fixed(x: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FRACTION_DIGITS);
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.abs() >= FIXED_NOTATION_LIMIT {
        return number_to_string(x);
    }

    let exact = format!("{:.*}", EXACT_PRECISION, x.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut kept);
    }

    let whole_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if x < 0.0 {
        out.push('-');
    }
    out.extend(kept[..whole_len].iter().copied().map(char::from));
    if digits > 0 {
        out.push('.');
        out.extend(kept[whole_len..].iter().copied().map(char::from));
    }
    out
}

/// Add one unit in the last place to a string of ASCII decimal digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "0" ; "zero")]
    #[test_case(-0.0, "0" ; "negative zero")]
    #[test_case(1.0, "1" ; "one")]
    #[test_case(1000.0, "1000" ; "thousand")]
    #[test_case(1234.5, "1234.5" ; "fraction")]
    #[test_case(-1234.5, "-1234.5" ; "negative fraction")]
    #[test_case(0.1, "0.1" ; "tenth")]
    #[test_case(0.1 + 0.2, "0.30000000000000004" ; "inexact sum")]
    #[test_case(0.000_001, "0.000001" ; "smallest plain")]
    #[test_case(0.000_000_1, "1e-7" ; "largest exponent form")]
    #[test_case(1.5e-7, "1.5e-7" ; "fractional exponent form")]
    #[test_case(1e20, "100000000000000000000" ; "largest plain")]
    #[test_case(1e21, "1e+21" ; "positive exponent form")]
    #[test_case(1.25e22, "1.25e+22" ; "positive fractional exponent")]
    #[test_case(f64::INFINITY, "Infinity" ; "infinity")]
    #[test_case(f64::NEG_INFINITY, "-Infinity" ; "negative infinity")]
    #[test_case(f64::NAN, "NaN" ; "nan")]
    fn renders_shortest_text(x: f64, expected: &str) {
        assert_eq!(number_to_string(x), expected);
    }

    #[test_case(5.0, 0, "5" ; "integer no digits")]
    #[test_case(2.0, 2, "2.00" ; "pads zeros")]
    #[test_case(3.14159, 2, "3.14" ; "truncates down")]
    #[test_case(2.5, 0, "3" ; "tie rounds up")]
    #[test_case(-2.5, 0, "-3" ; "negative tie rounds away from zero")]
    #[test_case(0.125, 2, "0.13" ; "exact binary tie rounds up")]
    #[test_case(2.005, 2, "2.00" ; "binary value below midpoint")]
    #[test_case(1.45, 1, "1.4" ; "binary value below midpoint again")]
    #[test_case(9.995, 2, "9.99" ; "below midpoint near carry")]
    #[test_case(9.999, 2, "10.00" ; "carry into whole part")]
    #[test_case(99.5, 0, "100" ; "carry adds a digit")]
    #[test_case(-0.001, 2, "-0.00" ; "negative rounds to signed zero")]
    #[test_case(-0.0, 2, "0.00" ; "negative zero is unsigned")]
    #[test_case(0.000_000_1, 3, "0.000" ; "tiny value")]
    #[test_case(123.456, 5, "123.45600" ; "extends precision")]
    #[test_case(1e21, 2, "1e+21" ; "exponent fallback")]
    #[test_case(f64::INFINITY, 2, "Infinity" ; "infinity")]
    #[test_case(f64::NAN, 2, "NaN" ; "nan")]
    fn fixed_notation(x: f64, digits: usize, expected: &str) {
        assert_eq!(to_fixed(x, digits), expected);
    }

    #[test]
    fn fixed_digits_are_clamped() {
        let rendered = to_fixed(1.0, 500);
        assert_eq!(rendered.len(), 2 + MAX_FRACTION_DIGITS);
        assert!(rendered.starts_with("1.000"));
    }

    #[test]
    fn increments_with_carry() {
        let mut digits = b"199".to_vec();
        increment_decimal(&mut digits);
        assert_eq!(digits, b"200");

        let mut digits = b"99".to_vec();
        increment_decimal(&mut digits);
        assert_eq!(digits, b"100");
    }
}
