// 🧩 Template Values - loosely typed helper input
// Numbers arrive from templates as ints, floats or strings; helpers treat
// numeric strings like numbers but hand non-numeric input back untouched.

use crate::number::float_to_string;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// A value passed in from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric reading of the value, `None` for non-numeric text
    ///
    /// Floats are always numeric (NaN and infinities included); text must be
    /// a plain decimal or exponent literal, optionally padded with whitespace.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(s) => {
                if is_numeric_str(s) {
                    s.trim().parse::<f64>().ok()
                } else {
                    None
                }
            }
        }
    }

    /// Like [`Value::as_number`], but NaN and infinities count as non-numeric
    pub fn as_finite_number(&self) -> Option<f64> {
        self.as_number().filter(|n| n.is_finite())
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// True only for integer-typed values; `"10"` is text, not an int
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Loose numeric equality against `n` (`"1.0"` equals 1)
    pub fn equals_number(&self, n: f64) -> bool {
        self.as_number() == Some(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&float_to_string(*x)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

// Unsigned counts beyond i64::MAX fall back to a float
macro_rules! impl_from_wide_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                i64::try_from(v)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(v as f64))
            }
        })*
    };
}

impl_from_wide_unsigned!(u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// Numeric string check
///
/// Accepts: `  -12`, `3.`, `.5`, `1e3`, `+2.5E-4 `
/// Rejects: ``, `.`, `1,000`, `0x1A`, `inf`, `nan`, `12abc`
pub fn is_numeric_str(s: &str) -> bool {
    let trimmed = s.trim_start_matches([' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}']);
    let trimmed = trimmed.trim_end_matches([' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}']);
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Result of a helper that hands invalid input back unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// The helper produced formatted text
    Formatted(String),
    /// Input failed validation and is returned as given
    Unchanged(Value),
}

impl Output {
    pub fn is_formatted(&self) -> bool {
        matches!(self, Output::Formatted(_))
    }

    /// Formatted text, if any
    pub fn formatted(&self) -> Option<&str> {
        match self {
            Output::Formatted(s) => Some(s),
            Output::Unchanged(_) => None,
        }
    }

    /// Render for the template: formatted text or the original value's text
    pub fn into_string(self) -> String {
        match self {
            Output::Formatted(s) => s,
            Output::Unchanged(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Formatted(s) => f.write_str(s),
            Output::Unchanged(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq<&str> for Output {
    fn eq(&self, other: &&str) -> bool {
        self.formatted() == Some(*other)
    }
}

// ============================================================================
// TESTS
// ============================================================================
