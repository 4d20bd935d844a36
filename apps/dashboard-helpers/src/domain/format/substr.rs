//! Substring extraction (`substr`).

use serde_json::{Map, Value};

use crate::domain::coercion::{to_display_string, to_integer};

/// Named argument holding the start offset.
pub const START_KEY: &str = "start";

/// Named argument holding the maximum length.
pub const LEN_KEY: &str = "len";

/// Options for [`substr`].
///
/// Offsets and lengths count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstrOptions {
    /// First character to keep (default 0). Negative counts from the end.
    pub start: Option<i64>,
    /// Maximum number of characters to keep (default: the rest of the text).
    pub len: Option<i64>,
}

impl SubstrOptions {
    /// Options with an explicit start and length.
    #[must_use]
    pub const fn new(start: i64, len: i64) -> Self {
        Self {
            start: Some(start),
            len: Some(len),
        }
    }

    /// Parse options from a helper call's named arguments.
    #[must_use]
    pub fn from_hash(hash: &Map<String, Value>) -> Self {
        Self {
            start: hash.get(START_KEY).map(integer_argument),
            len: hash.get(LEN_KEY).map(integer_argument),
        }
    }
}

// Saturating: infinities become i64::MIN / i64::MAX.
fn integer_argument(value: &Value) -> i64 {
    to_integer(Some(value)) as i64
}

/// Take up to `len` characters of a value's text starting at `start`.
///
/// Undefined and `null` read as empty text. A start past the end, or a
/// negative length, yields an empty string.
pub fn substr(value: Option<&Value>, options: &SubstrOptions) -> String {
    let text = match value {
        None | Some(Value::Null) => return String::new(),
        other => to_display_string(other),
    };

    let size = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
    let start = match options.start.unwrap_or(0) {
        start if start < 0 => size.saturating_add(start).max(0),
        start => start.min(size),
    };
    let len = options.len.unwrap_or(size);
    let end = start.saturating_add(len).min(size);
    if end <= start {
        return String::new();
    }

    text.chars()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect()
}
