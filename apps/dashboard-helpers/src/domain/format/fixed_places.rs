//! Fixed decimal places (`fixedPlaces`).

use serde_json::{Map, Value};
use tracing::trace;

use super::fraction_digits;
use crate::domain::coercion::to_number;
use crate::domain::number::to_fixed;

/// Named argument holding the number of fractional digits.
pub const DIGITS_KEY: &str = "digits";

/// Options for [`fixed_places`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPlacesOptions {
    /// Digits after the decimal point (default 0).
    pub digits: Option<usize>,
}

impl FixedPlacesOptions {
    /// Options with an explicit digit count.
    #[must_use]
    pub const fn with_digits(digits: usize) -> Self {
        Self {
            digits: Some(digits),
        }
    }

    /// Parse options from a helper call's named arguments.
    #[must_use]
    pub fn from_hash(hash: &Map<String, Value>) -> Self {
        Self {
            digits: fraction_digits(hash.get(DIGITS_KEY)),
        }
    }
}

/// Format a value with a fixed number of fractional digits.
///
/// Values without a numeric reading print as `NaN`.
pub fn fixed_places(num: Option<&Value>, options: &FixedPlacesOptions) -> String {
    let value = to_number(num);
    if value.is_nan() {
        trace!(?num, "fixedPlaces input is not numeric");
    }
    to_fixed(value, options.digits.unwrap_or(0))
}
