//! Percentage formatting (`percentify`).

use serde_json::{Map, Value};
use tracing::trace;

use super::fraction_digits;
use crate::domain::coercion::to_number;
use crate::domain::number::to_fixed;

/// Named argument holding the number of decimals.
pub const DECIMALS_KEY: &str = "decimals";

/// Options for [`percentify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentifyOptions {
    /// Digits after the decimal point (default 0).
    pub decimals: Option<usize>,
}

impl PercentifyOptions {
    /// Options with an explicit decimal count.
    #[must_use]
    pub const fn with_decimals(decimals: usize) -> Self {
        Self {
            decimals: Some(decimals),
        }
    }

    /// Parse options from a helper call's named arguments.
    #[must_use]
    pub fn from_hash(hash: &Map<String, Value>) -> Self {
        Self {
            decimals: fraction_digits(hash.get(DECIMALS_KEY)),
        }
    }
}

/// Format a fraction as a percentage, e.g. `0.125` → `13%` or `12.5%`.
///
/// Values without a numeric reading print as `NaN%`.
pub fn percentify(num: Option<&Value>, options: &PercentifyOptions) -> String {
    let value = to_number(num) * 100.0;
    if value.is_nan() {
        trace!(?num, "percentify input is not numeric");
    }
    format!("{}%", to_fixed(value, options.decimals.unwrap_or(0)))
}
