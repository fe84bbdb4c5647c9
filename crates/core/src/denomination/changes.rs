//! Per-denomination difference between two breakdowns.

use serde::ser::{Serialize, Serializer};

use super::breakdown::{Breakdown, serialize_entries};
use super::ledger::{Denomination, DenominationLedger};

/// Signed count deltas (current minus previous), in ledger order.
///
/// A denomination appears when either side used it, so a zero delta is a
/// real entry meaning "same count as before".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    entries: Vec<(Denomination, i64)>,
}

impl ChangeSet {
    /// `(denomination, delta)` pairs from largest to smallest denomination.
    #[must_use]
    pub fn entries(&self) -> &[(Denomination, i64)] {
        &self.entries
    }

    /// Iterates `(denomination, delta)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (&Denomination, i64)> {
        self.entries.iter().map(|(d, delta)| (d, *delta))
    }

    /// Delta for a canonical key such as `"5.00"`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(d, _)| d.to_string() == key)
            .map(|(_, delta)| *delta)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if neither breakdown used any denomination.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if every delta is zero.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.entries.iter().all(|(_, delta)| *delta == 0)
    }

    /// Net value of the deltas in minor units.
    #[must_use]
    pub fn net_cents(&self) -> i64 {
        self.entries
            .iter()
            .map(|(d, delta)| d.cents() * delta)
            .sum()
    }
}

impl Serialize for ChangeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&self.entries, serializer)
    }
}

/// Diffs two breakdowns made against the same ledger.
#[must_use]
pub fn diff(current: &Breakdown, previous: &Breakdown, ledger: &DenominationLedger) -> ChangeSet {
    let entries = ledger
        .iter()
        .filter_map(|denomination| {
            let now = current.count(denomination);
            let before = previous.count(denomination);
            (now != 0 || before != 0).then_some((*denomination, now - before))
        })
        .collect();

    ChangeSet { entries }
}
