use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal as WrappedDecimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Any decimal-like value expressible as `significand * 10^exponent`.
pub trait DecimalLike {
    fn significand(&self) -> i128;
    fn exponent(&self) -> i32;
}

/// Fixed-point value for monetary fields, backed by `rust_decimal::Decimal`.
///
/// Written as its canonical text (`"123.45"`). Read from a string or a number;
/// numbers are taken from their literal text, never through `f64`. `null`
/// reads as zero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Decimal = Decimal(WrappedDecimal::ZERO);

    /// `significand * 10^exponent`. Positive exponents are folded into the
    /// significand, so they come back from [`DecimalLike::exponent`] as 0.
    pub fn new(significand: i64, exponent: i32) -> Result<Self, rust_decimal::Error> {
        Self::from_parts(i128::from(significand), exponent)
    }

    pub fn copy_from(value: &impl DecimalLike) -> Result<Self, rust_decimal::Error> {
        Self::from_parts(value.significand(), value.exponent())
    }

    /// Float input is the one place where precision loss is accepted.
    pub fn from_f64(value: f64) -> Result<Self, rust_decimal::Error> {
        WrappedDecimal::try_from(value).map(Decimal)
    }

    pub const fn inner(self) -> WrappedDecimal {
        self.0
    }

    fn from_parts(significand: i128, exponent: i32) -> Result<Self, rust_decimal::Error> {
        if exponent <= 0 {
            return WrappedDecimal::try_from_i128_with_scale(significand, exponent.unsigned_abs())
                .map(Decimal);
        }

        let scaled = 10i128
            .checked_pow(exponent.unsigned_abs())
            .and_then(|factor| significand.checked_mul(factor))
            .ok_or(rust_decimal::Error::ExceedsMaximumPossibleValue)?;
        WrappedDecimal::try_from_i128_with_scale(scaled, 0).map(Decimal)
    }
}

impl DecimalLike for Decimal {
    fn significand(&self) -> i128 {
        DecimalLike::significand(&self.0)
    }

    fn exponent(&self) -> i32 {
        DecimalLike::exponent(&self.0)
    }
}

impl DecimalLike for WrappedDecimal {
    fn significand(&self) -> i128 {
        self.mantissa()
    }

    fn exponent(&self) -> i32 {
        // scale is bounded by 28
        -(self.scale() as i32)
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(value: WrappedDecimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(WrappedDecimal::from(value))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrappedDecimal::from_str(s)
            .or_else(|_| WrappedDecimal::from_scientific(s))
            .map(Decimal)
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Value::deserialize(deserializer)? {
            Value::Null => return Ok(Decimal::ZERO),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => return Err(D::Error::custom(format!("expected decimal, got {other}"))),
        };

        text.trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid decimal {text:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_survive_encode_decode() {
        for (significand, exponent) in [(12345, -2), (100, -2), (-7, 0), (1, -28), (0, -3)] {
            let value = Decimal::new(significand, exponent).unwrap();
            let encoded = serde_json::to_string(&value).unwrap();
            let decoded: Decimal = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded.significand(), i128::from(significand), "{encoded}");
            assert_eq!(decoded.exponent(), exponent, "{encoded}");
        }
    }

    #[test]
    fn encodes_canonical_text() {
        let value = Decimal::new(12345, -2).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""123.45""#);
    }

    #[test]
    fn positive_exponent_folds_into_significand() {
        let value = Decimal::new(5, 2).unwrap();
        assert_eq!(value.to_string(), "500");
        assert_eq!(value.significand(), 500);
        assert_eq!(value.exponent(), 0);
    }

    #[test]
    fn out_of_range_exponent_is_an_error() {
        assert!(Decimal::new(1, -40).is_err());
        assert!(Decimal::new(i64::MAX, 30).is_err());
    }

    #[test]
    fn accessors_delegate_to_wrapped_value() {
        let wrapped = WrappedDecimal::new(-98765, 3);
        let value = Decimal::from(wrapped);
        assert_eq!(value.significand(), wrapped.significand());
        assert_eq!(value.exponent(), -3);
        assert_eq!(Decimal::copy_from(&wrapped).unwrap(), value);
    }

    #[test]
    fn from_float_keeps_the_written_digits() {
        assert_eq!(Decimal::from_f64(100.12).unwrap().to_string(), "100.12");
        assert!(Decimal::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn decodes_numbers_and_null() {
        assert_eq!(
            serde_json::from_str::<Decimal>("19.99").unwrap(),
            Decimal::new(1999, -2).unwrap()
        );
        assert_eq!(serde_json::from_str::<Decimal>("42").unwrap(), Decimal::from(42_i64));
        assert_eq!(serde_json::from_str::<Decimal>("null").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn decodes_numbers_without_float_rounding() {
        let large: Decimal = serde_json::from_str("12345678901234567.89").unwrap();
        assert_eq!(large.significand(), 1_234_567_890_123_456_789);
        assert_eq!(large.exponent(), -2);

        let padded: Decimal = serde_json::from_str("19.90").unwrap();
        assert_eq!(padded.significand(), 1990);
        assert_eq!(padded.exponent(), -2);
        assert_eq!(padded.to_string(), "19.90");
    }

    #[test]
    fn decodes_numbers_inside_entities() {
        #[derive(Deserialize)]
        struct Line {
            price: Decimal,
        }

        let line: Line = serde_json::from_str(r#"{"price": 0.10}"#).unwrap();
        assert_eq!(line.price, Decimal::new(10, -2).unwrap());
        assert_eq!(line.price.exponent(), -2);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Decimal>(r#""12,5""#).is_err());
        assert!(serde_json::from_str::<Decimal>("true").is_err());
    }
}
