//! Amount normalization into exact minor units.
//!
//! Amounts arrive as decimals and leave as an integer count of cents.
//! Rounding is half away from zero, so `0.025` becomes 3 cents, not the
//! 2 cents banker's rounding would give.

use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};

use super::error::DenominationError;

/// Minor units per major unit.
pub const CENTS_PER_UNIT: i64 = 100;

/// A non-negative amount expressed in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmountCents(i64);

impl AmountCents {
    /// Returns the number of cents.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the amount in major units with two decimal places.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl std::fmt::Display for AmountCents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_cents(f, self.0)
    }
}

/// Serialized as a JSON number (`234.23`), the shape existing clients read.
impl Serialize for AmountCents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.to_decimal(), serializer)
    }
}

/// Writes a cent count as `units.cc`.
pub(crate) fn write_cents(f: &mut std::fmt::Formatter<'_>, cents: i64) -> std::fmt::Result {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Converts a decimal value to minor units, rounding half away from zero.
///
/// Returns `None` if the result does not fit in an `i64`.
pub(crate) fn to_minor_units(value: Decimal) -> Option<i64> {
    value
        .checked_mul(Decimal::from(CENTS_PER_UNIT))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Normalizes a decimal amount into exact cents.
///
/// # Errors
///
/// Returns `InvalidAmount` for negative amounts and `ArithmeticOverflow` when
/// the cent count exceeds the `i64` range.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use denomination_core::denomination::normalize;
///
/// assert_eq!(normalize(dec!(234.23)).unwrap().value(), 23423);
/// assert_eq!(normalize(dec!(0.025)).unwrap().value(), 3);
/// ```
pub fn normalize(amount: Decimal) -> Result<AmountCents, DenominationError> {
    if amount < Decimal::ZERO {
        return Err(DenominationError::InvalidAmount);
    }

    to_minor_units(amount)
        .map(AmountCents)
        .ok_or(DenominationError::ArithmeticOverflow)
}

/// Normalizes a binary floating-point amount into exact cents.
///
/// The float is first converted to the shortest decimal that round-trips,
/// so `0.285` is treated as `0.285` and not as `0.28499999999999998`.
///
/// # Errors
///
/// Returns `InvalidAmount` for NaN, infinite or negative input and
/// `ArithmeticOverflow` when the value is out of range.
pub fn normalize_f64(amount: f64) -> Result<AmountCents, DenominationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DenominationError::InvalidAmount);
    }

    let decimal = Decimal::from_f64(amount).ok_or(DenominationError::ArithmeticOverflow)?;
    normalize(decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), 0)]
    #[case(dec!(0.01), 1)]
    #[case(dec!(0.03), 3)]
    #[case(dec!(100.00), 10_000)]
    #[case(dec!(234.23), 23_423)]
    #[case(dec!(45.32), 4_532)]
    #[case(dec!(0.004), 0)]
    #[case(dec!(0.005), 1)]
    #[case(dec!(0.025), 3)]
    #[case(dec!(1.005), 101)]
    #[case(dec!(2.675), 268)]
    #[case(dec!(19.9949), 1_999)]
    fn test_normalize(#[case] amount: Decimal, #[case] expected: i64) {
        assert_eq!(normalize(amount).unwrap().value(), expected);
    }

    #[test]
    fn test_normalize_negative_is_invalid() {
        assert_eq!(normalize(dec!(-1.0)), Err(DenominationError::InvalidAmount));
        assert_eq!(normalize(dec!(-0.001)), Err(DenominationError::InvalidAmount));
    }

    #[test]
    fn test_normalize_overflow() {
        assert_eq!(
            normalize(Decimal::MAX),
            Err(DenominationError::ArithmeticOverflow)
        );
        // Fits in Decimal but not in i64 cents.
        assert_eq!(
            normalize(Decimal::new(100_000_000_000_000_000, 0)),
            Err(DenominationError::ArithmeticOverflow)
        );
    }

    #[rstest]
    #[case(234.23, 23_423)]
    #[case(0.03, 3)]
    #[case(0.0, 0)]
    #[case(0.285, 29)]
    #[case(1.005, 101)]
    #[case(2.675, 268)]
    fn test_normalize_f64(#[case] amount: f64, #[case] expected: i64) {
        assert_eq!(normalize_f64(amount).unwrap().value(), expected);
    }

    #[test]
    fn test_normalize_f64_rejects_non_finite() {
        assert_eq!(normalize_f64(f64::NAN), Err(DenominationError::InvalidAmount));
        assert_eq!(
            normalize_f64(f64::INFINITY),
            Err(DenominationError::InvalidAmount)
        );
        assert_eq!(
            normalize_f64(f64::NEG_INFINITY),
            Err(DenominationError::InvalidAmount)
        );
        assert_eq!(normalize_f64(-1.0), Err(DenominationError::InvalidAmount));
    }

    #[test]
    fn test_normalize_f64_overflow() {
        assert_eq!(
            normalize_f64(1e20),
            Err(DenominationError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_amount_cents_display() {
        assert_eq!(AmountCents(23_423).to_string(), "234.23");
        assert_eq!(AmountCents(10_000).to_string(), "100.00");
        assert_eq!(AmountCents(3).to_string(), "0.03");
        assert_eq!(AmountCents(0).to_string(), "0.00");
    }

    #[test]
    fn test_amount_cents_serializes_as_number() {
        assert_eq!(serde_json::to_string(&AmountCents(23_423)).unwrap(), "234.23");
        assert_eq!(serde_json::to_string(&AmountCents(3)).unwrap(), "0.03");
        assert_eq!(serde_json::to_string(&AmountCents(10_000)).unwrap(), "100.0");
    }

    #[test]
    fn test_amount_cents_to_decimal() {
        assert_eq!(AmountCents(23_423).to_decimal(), dec!(234.23));
        assert_eq!(AmountCents(1).to_decimal(), dec!(0.01));
    }
}
