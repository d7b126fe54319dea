//! Numeric value representation
//!
//! This module defines [`Num`], the tagged numeric value flowing through the
//! calculator. Values are either whole numbers or floating point; a float
//! whose fractional part is exactly zero is normalized to [`Num::Int`] on
//! creation, so `Float` always carries a genuinely fractional value.

/// A computed numeric value: a whole number or a floating-point number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Build a value from a float, normalizing whole values to `Int`.
    pub fn from_f64(v: f64) -> Num {
        if v.is_finite()
            && v.fract() == 0.0
            && v >= i64::MIN as f64
            && v <= i64::MAX as f64
        {
            Num::Int(v as i64)
        } else {
            Num::Float(v)
        }
    }

    /// Get the whole-number value, returns None if this is a `Float`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Num::Int(n) => Some(*n),
            Num::Float(_) => None,
        }
    }

    /// The value widened to a float.
    pub fn as_f64(&self) -> f64 {
        match self {
            Num::Int(n) => *n as f64,
            Num::Float(f) => *f,
        }
    }

    /// Truncate toward zero to a whole number.
    ///
    /// Applied to the result of any expression that contained a bitwise
    /// operator or an explicit hex/binary literal.
    pub fn truncate(&self) -> Num {
        match self {
            Num::Int(n) => Num::Int(*n),
            // `as` saturates on out-of-range floats
            Num::Float(f) => Num::Int(f.trunc() as i64),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Num::Int(n) => *n == 0,
            Num::Float(f) => *f == 0.0,
        }
    }

    /// Plain rendering used when substituting a variable into an expression:
    /// whole numbers without a decimal point, floats in full precision.
    pub fn to_plain_string(&self) -> String {
        match self {
            Num::Int(n) => n.to_string(),
            Num::Float(f) => f.to_string(),
        }
    }

    /// Rendering used in the annotated output: floats are shown with two
    /// decimal places (whole values are already `Int` and show none).
    pub fn to_display_string(&self) -> String {
        match self {
            Num::Int(n) => n.to_string(),
            Num::Float(f) => format!("{:.2}", f),
        }
    }
}
