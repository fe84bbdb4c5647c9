//! Property-based tests for denomination breakdowns.
//!
//! - Property 1: Breakdown Sum Invariant
//! - Property 2: Change Set Sum Invariant
//! - Property 3: Self Diff Is All Zero

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::amount::normalize;
use super::breakdown::breakdown;
use super::changes::diff;
use super::ledger::DenominationLedger;

/// Strategy to generate whole-cent amounts (0.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with a third decimal place (0.000 to 100,000.000).
fn sub_cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|mills| Decimal::new(mills, 3))
}

/// Strategy to generate a ledger that always contains 0.01.
fn complete_ledger() -> impl Strategy<Value = DenominationLedger> {
    prop::collection::btree_set(2i64..100_000, 0..12).prop_map(|mut cents| {
        cents.insert(1);
        DenominationLedger::new(cents.into_iter().map(|c| Decimal::new(c, 2)))
            .expect("distinct positive values form a valid ledger")
    })
}

/// Strategy to generate an arbitrary valid ledger.
fn any_ledger() -> impl Strategy<Value = DenominationLedger> {
    prop::collection::btree_set(1i64..100_000, 1..12).prop_map(|cents| {
        DenominationLedger::new(cents.into_iter().map(|c| Decimal::new(c, 2)))
            .expect("distinct positive values form a valid ledger")
    })
}

fn weighted_sum(pairs: impl Iterator<Item = (i64, i64)>) -> i64 {
    pairs.map(|(cents, n)| cents * n).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Breakdown Sum Invariant
    // =========================================================================

    /// Property 1.1: With the Euro ladder, counts add up to the amount.
    #[test]
    fn prop_euro_breakdown_sums_to_amount(amount in cent_amount()) {
        let cents = normalize(amount).unwrap();
        let result = breakdown(cents, &DenominationLedger::euro());

        let total = weighted_sum(result.iter().map(|(d, n)| (d.cents(), n)));
        prop_assert_eq!(total, cents.value());
        prop_assert!(result.is_exact());
    }

    /// Property 1.2: Sub-cent input is rounded half away from zero first.
    #[test]
    fn prop_breakdown_matches_rounded_amount(amount in sub_cent_amount()) {
        let cents = normalize(amount).unwrap();
        let result = breakdown(cents, &DenominationLedger::euro());

        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let total = weighted_sum(result.iter().map(|(d, n)| (d.cents(), n)));
        prop_assert_eq!(Decimal::new(total, 2), rounded);
    }

    /// Property 1.3: Any ledger ending in 0.01 represents every amount exactly.
    #[test]
    fn prop_complete_ledger_is_exact(
        amount in cent_amount(),
        ledger in complete_ledger(),
    ) {
        let result = breakdown(normalize(amount).unwrap(), &ledger);
        prop_assert!(result.is_exact());
        prop_assert_eq!(result.distributed(), result.amount().value());
    }

    /// Property 1.4: Counts are positive, ordered, and the remainder is smaller
    /// than the smallest denomination.
    #[test]
    fn prop_breakdown_shape(
        amount in cent_amount(),
        ledger in any_ledger(),
    ) {
        let result = breakdown(normalize(amount).unwrap(), &ledger);

        prop_assert!(result.iter().all(|(_, n)| n > 0));
        prop_assert!(result.entries().windows(2).all(|w| w[0].0.cents() > w[1].0.cents()));
        prop_assert!(result.remainder() >= 0);
        prop_assert!(result.remainder() < ledger.smallest().cents());
        prop_assert_eq!(result.distributed() + result.remainder(), result.amount().value());
    }

    /// Property 1.5: Breakdown is deterministic.
    #[test]
    fn prop_breakdown_is_deterministic(
        amount in cent_amount(),
        ledger in any_ledger(),
    ) {
        let cents = normalize(amount).unwrap();
        prop_assert_eq!(breakdown(cents, &ledger), breakdown(cents, &ledger));
    }

    // =========================================================================
    // Property 2: Change Set Sum Invariant
    // =========================================================================

    /// Property 2.1: Weighted deltas equal the difference of the amounts.
    #[test]
    fn prop_diff_sums_to_amount_difference(
        current in cent_amount(),
        previous in cent_amount(),
    ) {
        let ledger = DenominationLedger::euro();
        let now = breakdown(normalize(current).unwrap(), &ledger);
        let before = breakdown(normalize(previous).unwrap(), &ledger);

        let changes = diff(&now, &before, &ledger);
        prop_assert_eq!(
            Decimal::new(changes.net_cents(), 2),
            current - previous
        );
    }

    /// Property 2.2: Keys are exactly the denominations either side used.
    #[test]
    fn prop_diff_keys_are_union_of_used(
        current in cent_amount(),
        previous in cent_amount(),
        ledger in any_ledger(),
    ) {
        let now = breakdown(normalize(current).unwrap(), &ledger);
        let before = breakdown(normalize(previous).unwrap(), &ledger);
        let changes = diff(&now, &before, &ledger);

        for denomination in &ledger {
            let used = now.count(denomination) != 0 || before.count(denomination) != 0;
            let present = changes.iter().any(|(d, _)| d == denomination);
            prop_assert_eq!(used, present);
        }
        prop_assert_eq!(changes.net_cents(), now.distributed() - before.distributed());
    }

    // =========================================================================
    // Property 3: Self Diff Is All Zero
    // =========================================================================

    /// Property 3.1: Diffing a breakdown with itself yields zeros over the same keys.
    #[test]
    fn prop_self_diff_is_all_zero(amount in cent_amount()) {
        let ledger = DenominationLedger::euro();
        let result = breakdown(normalize(amount).unwrap(), &ledger);
        let changes = diff(&result, &result, &ledger);

        prop_assert!(changes.is_unchanged());
        let keys: Vec<i64> = changes.iter().map(|(d, _)| d.cents()).collect();
        let used: Vec<i64> = result.iter().map(|(d, _)| d.cents()).collect();
        prop_assert_eq!(keys, used);
    }
}
