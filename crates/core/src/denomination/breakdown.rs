//! Greedy breakdown of an amount into denomination counts.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::amount::AmountCents;
use super::ledger::{Denomination, DenominationLedger};

/// Counts per denomination for one amount, in ledger order.
///
/// Only denominations with a positive count are present. Whatever the
/// ledger could not express is kept in [`Breakdown::remainder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    amount: AmountCents,
    entries: Vec<(Denomination, i64)>,
    remainder: i64,
}

impl Breakdown {
    /// The amount that was broken down.
    #[must_use]
    pub const fn amount(&self) -> AmountCents {
        self.amount
    }

    /// `(denomination, count)` pairs from largest to smallest denomination.
    #[must_use]
    pub fn entries(&self) -> &[(Denomination, i64)] {
        &self.entries
    }

    /// Iterates `(denomination, count)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (&Denomination, i64)> {
        self.entries.iter().map(|(d, c)| (d, *c))
    }

    /// Count for a denomination, zero if absent.
    #[must_use]
    pub fn count(&self, denomination: &Denomination) -> i64 {
        self.entries
            .iter()
            .find(|(d, _)| d.cents() == denomination.cents())
            .map_or(0, |(_, c)| *c)
    }

    /// Count for a canonical key such as `"2.00"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(d, _)| d.to_string() == key)
            .map(|(_, c)| *c)
    }

    /// Number of distinct denominations used.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true for a zero amount (or one smaller than every denomination).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of banknotes and coins.
    #[must_use]
    pub fn unit_count(&self) -> i64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Minor units left after the smallest denomination.
    #[must_use]
    pub const fn remainder(&self) -> i64 {
        self.remainder
    }

    /// Minor units covered by the listed denominations.
    #[must_use]
    pub const fn distributed(&self) -> i64 {
        self.amount.value() - self.remainder
    }

    /// Returns true if the counts add up to the whole amount.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.remainder == 0
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&self.entries, serializer)
    }
}

/// Serializes ordered pairs as a JSON-style object keyed by denomination.
pub(crate) fn serialize_entries<S: Serializer>(
    entries: &[(Denomination, i64)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (denomination, n) in entries {
        map.serialize_entry(&denomination.to_string(), n)?;
    }
    map.end()
}

/// Breaks `cents` down greedily, largest denomination first.
///
/// Each denomination takes as many units as fit into what is left. A
/// remainder smaller than the smallest denomination is not distributed;
/// it is recorded on the result instead.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use denomination_core::denomination::{DenominationLedger, breakdown, normalize};
///
/// let ledger = DenominationLedger::euro();
/// let result = breakdown(normalize(dec!(0.03)).unwrap(), &ledger);
/// assert_eq!(result.get("0.02"), Some(1));
/// assert_eq!(result.get("0.01"), Some(1));
/// ```
#[must_use]
pub fn breakdown(cents: AmountCents, ledger: &DenominationLedger) -> Breakdown {
    let mut remaining = cents.value();
    let mut entries = Vec::new();

    for denomination in ledger {
        let value = denomination.cents();
        if remaining >= value {
            let count = remaining / value;
            entries.push((*denomination, count));
            remaining -= count * value;
        }
    }

    Breakdown {
        amount: cents,
        entries,
        remainder: remaining,
    }
}
