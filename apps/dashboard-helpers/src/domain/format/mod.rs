//! Formatting helpers for dashboard templates.
//!
//! Each helper takes the positional template argument (`None` when the
//! template referenced something the context does not have) and a typed
//! options struct parsed from the call's named arguments. None of them fail:
//! unusable input degrades to `0`, `NaN`, or an empty string.

mod commafy;
mod fixed_places;
mod percentify;
mod substr;

pub use commafy::{GROUP_SEPARATOR, commafy, group_thousands};
pub use fixed_places::{DIGITS_KEY, FixedPlacesOptions, fixed_places};
pub use percentify::{DECIMALS_KEY, PercentifyOptions, percentify};
pub use substr::{LEN_KEY, START_KEY, SubstrOptions, substr};

use serde_json::Value;

use super::coercion::to_integer;
use super::number::MAX_FRACTION_DIGITS;

/// Read a fractional-digit count from a named argument.
///
/// Falsy and non-numeric values count as zero; the result is clamped to
/// `0..=MAX_FRACTION_DIGITS`.
fn fraction_digits(value: Option<&Value>) -> Option<usize> {
    let value = value?;
    let digits = to_integer(Some(value));
    if digits <= 0.0 {
        Some(0)
    } else {
        Some((digits as usize).min(MAX_FRACTION_DIGITS))
    }
}
