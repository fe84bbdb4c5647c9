//! Denomination ledger: the fixed set of banknotes and coins.
//!
//! A ledger is built once from configuration and shared read-only by every
//! calculation. Construction sorts values from largest to smallest and
//! rejects anything a greedy breakdown could not work with.

use rust_decimal::Decimal;

use super::amount::{to_minor_units, write_cents};
use super::error::DenominationError;

/// Euro banknotes and coins, in cents.
const EURO_CENTS: [i64; 15] = [
    50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100, 50, 20, 10, 5, 2, 1,
];

/// A single banknote or coin face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Denomination {
    value: Decimal,
    cents: i64,
}

impl Denomination {
    /// Creates a denomination from its face value.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the value is not positive, is smaller than
    /// one cent, or is too large for minor-unit arithmetic.
    pub fn new(value: Decimal) -> Result<Self, DenominationError> {
        if value <= Decimal::ZERO {
            return Err(DenominationError::Configuration(format!(
                "denomination {value} must be positive"
            )));
        }

        let cents = to_minor_units(value).ok_or_else(|| {
            DenominationError::Configuration(format!("denomination {value} is too large"))
        })?;

        if cents == 0 {
            return Err(DenominationError::Configuration(format!(
                "denomination {value} is smaller than one minor unit"
            )));
        }

        Ok(Self { value, cents })
    }

    fn from_cents(cents: i64) -> Self {
        Self {
            value: Decimal::new(cents, 2),
            cents,
        }
    }

    /// Face value as configured.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Face value in minor units.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }
}

/// Canonical key: two decimal places, e.g. `200.00` or `0.02`.
impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_cents(f, self.cents)
    }
}

/// Immutable list of denominations, strictly descending by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationLedger {
    denominations: Vec<Denomination>,
}

impl DenominationLedger {
    /// Builds a ledger from face values given in any order.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the list is empty, holds a non-positive
    /// value, or holds two values with the same minor-unit amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use denomination_core::denomination::DenominationLedger;
    ///
    /// let ledger = DenominationLedger::new([dec!(0.5), dec!(2), dec!(1)]).unwrap();
    /// let keys: Vec<String> = ledger.iter().map(ToString::to_string).collect();
    /// assert_eq!(keys, ["2.00", "1.00", "0.50"]);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, DenominationError>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut denominations = values
            .into_iter()
            .map(Denomination::new)
            .collect::<Result<Vec<_>, _>>()?;

        if denominations.is_empty() {
            return Err(DenominationError::Configuration(
                "at least one denomination is required".to_string(),
            ));
        }

        denominations.sort_by(|a, b| b.cents.cmp(&a.cents));

        if let Some(pair) = denominations.windows(2).find(|w| w[0].cents == w[1].cents) {
            return Err(DenominationError::Configuration(format!(
                "duplicate denomination {} ({} and {})",
                pair[0], pair[0].value, pair[1].value
            )));
        }

        Ok(Self { denominations })
    }

    /// The Euro ladder from 500 down to 0.01.
    #[must_use]
    pub fn euro() -> Self {
        Self {
            denominations: EURO_CENTS.iter().map(|&c| Denomination::from_cents(c)).collect(),
        }
    }

    /// Iterates denominations from largest to smallest.
    pub fn iter(&self) -> std::slice::Iter<'_, Denomination> {
        self.denominations.iter()
    }

    /// Face values from largest to smallest.
    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.denominations.iter().map(Denomination::value)
    }

    /// Number of denominations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    /// Always false: construction rejects empty ledgers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }

    /// The smallest denomination.
    #[must_use]
    pub fn smallest(&self) -> &Denomination {
        &self.denominations[self.denominations.len() - 1]
    }

    /// Returns true if every whole-cent amount can be broken down exactly.
    #[must_use]
    pub fn covers_every_cent(&self) -> bool {
        self.smallest().cents == 1
    }
}

impl<'a> IntoIterator for &'a DenominationLedger {
    type Item = &'a Denomination;
    type IntoIter = std::slice::Iter<'a, Denomination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
