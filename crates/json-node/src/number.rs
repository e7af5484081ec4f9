//! The numeric scalar carried by [`Node::Number`](crate::Node::Number).
//!
//! A single type holds both integer and floating-point magnitudes; whether a
//! value is integral is a property of the value, not of the node variant.
//! Storage is delegated to `serde_json::Number`, so precision follows
//! whatever the parser produced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A JSON number.
#[derive(Debug, Clone)]
pub struct Number(serde_json::Number);

impl Number {
    /// Build a number from a float. Returns `None` for NaN and infinities,
    /// which have no JSON representation.
    pub fn from_f64(f: f64) -> Option<Self> {
        serde_json::Number::from_f64(f).map(Number)
    }

    /// True if the stored value is an integer (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        self.0.is_i64() || self.0.is_u64()
    }

    /// True if the stored value is a float.
    pub fn is_float(&self) -> bool {
        self.0.is_f64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    /// The value as `f64`. Always succeeds; large integers may round.
    pub fn as_f64(&self) -> f64 {
        // serde_json only returns None here under arbitrary_precision, which
        // this crate does not enable.
        self.0.as_f64().unwrap_or(f64::NAN)
    }

    /// The value as `f64`, only if no precision is lost. Integers beyond
    /// 2^53 that do not land exactly on a float return `None`.
    pub fn as_f64_exact(&self) -> Option<f64> {
        match self.as_i128() {
            Some(i) => {
                let f = i as f64;
                integral_float_eq(i, f).then_some(f)
            }
            None => self.0.as_f64(),
        }
    }

    /// Exact integer view wide enough for both the `i64` and `u64` ranges.
    fn as_i128(&self) -> Option<i128> {
        self.0
            .as_i64()
            .map(i128::from)
            .or_else(|| self.0.as_u64().map(i128::from))
    }
}

/// True if `f` is integral and denotes exactly the integer `i`.
fn integral_float_eq(i: i128, f: f64) -> bool {
    // Below 2^127 the cast to i128 is exact for any integral float.
    f.fract() == 0.0 && f.abs() < 2f64.powi(127) && f as i128 == i
}

/// Numbers compare by exact mathematical value, whatever their storage kind:
/// `1 == 1.0`, but `2^53 + 1` is not equal to the float `2^53`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => a == b,
            (Some(i), None) => integral_float_eq(i, other.as_f64()),
            (None, Some(i)) => integral_float_eq(i, self.as_f64()),
            (None, None) => self.as_f64() == other.as_f64(),
        }
    }
}

// serde_json::Number never holds NaN, so equality is reflexive.
impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        Number(n)
    }
}

impl From<Number> for serde_json::Number {
    fn from(n: Number) -> Self {
        n.0
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number(i.into())
    }
}

impl From<u64> for Number {
    fn from(u: u64) -> Self {
        Number(u.into())
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number(i.into())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        serde_json::Number::deserialize(deserializer).map(Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_kinds_compare_across_sign_storage() {
        // serde_json stores non-negative integers as u64 and negatives as i64
        assert_eq!(Number::from(7i64), Number::from(7u64));
        assert_ne!(Number::from(-1i64), Number::from(u64::MAX));
    }

    #[test]
    fn integer_equals_integral_float() {
        let one_float = Number::from_f64(1.0).unwrap();
        assert_eq!(Number::from(1i64), one_float);
        assert_eq!(one_float, Number::from(1i64));
    }

    #[test]
    fn equality_is_transitive_past_float_precision() {
        let two_53: u64 = 1 << 53;
        let a = Number::from(two_53);
        let b = Number::from_f64(two_53 as f64).unwrap();
        let c = Number::from(two_53 + 1);
        assert_eq!(a, b);
        assert_ne!(b, c, "2^53 + 1 has no exact float form");
        assert_ne!(a, c);
    }

    #[test]
    fn fractional_float_never_equals_integer() {
        assert_ne!(Number::from(2i64), Number::from_f64(2.5).unwrap());
        assert_ne!(Number::from_f64(-0.5).unwrap(), Number::from(0i64));
    }

    #[test]
    fn negative_zero_equals_zero() {
        assert_eq!(Number::from_f64(-0.0).unwrap(), Number::from(0i64));
    }

    #[test]
    fn exact_float_view() {
        let two_53: u64 = 1 << 53;
        assert_eq!(Number::from(two_53).as_f64_exact(), Some(two_53 as f64));
        assert_eq!(Number::from(two_53 + 1).as_f64_exact(), None);
        assert_eq!(Number::from(u64::MAX).as_f64_exact(), None);
        assert_eq!(Number::from(-3i64).as_f64_exact(), Some(-3.0));
        assert_eq!(Number::from_f64(0.1).unwrap().as_f64_exact(), Some(0.1));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn kind_is_a_property_of_the_value() {
        assert!(Number::from(3i64).is_integer());
        assert!(!Number::from(3i64).is_float());
        assert!(Number::from_f64(2.5).unwrap().is_float());
    }
}
