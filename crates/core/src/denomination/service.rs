//! Denomination service: one calculation request from start to finish.
//!
//! The service owns the shared ledger and the remainder policy. It
//! normalizes the requested amounts, breaks them down and, when a previous
//! amount is given, diffs the two breakdowns.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

pub use denomination_shared::RemainderPolicy;

use super::amount::{AmountCents, normalize};
use super::breakdown::{Breakdown, breakdown};
use super::changes::{ChangeSet, diff};
use super::error::DenominationError;
use super::ledger::DenominationLedger;

/// Outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationResult {
    /// Requested amount, normalized to cents.
    pub amount: AmountCents,
    /// Counts for the requested amount.
    pub breakdown: Breakdown,
    /// Deltas against the previous amount; `None` when none was given.
    pub changes: Option<ChangeSet>,
}

/// Calculates breakdowns against a fixed ledger.
#[derive(Debug, Clone)]
pub struct DenominationService {
    ledger: Arc<DenominationLedger>,
    policy: RemainderPolicy,
}

impl DenominationService {
    /// Creates a service over a shared ledger.
    #[must_use]
    pub const fn new(ledger: Arc<DenominationLedger>, policy: RemainderPolicy) -> Self {
        Self { ledger, policy }
    }

    /// The ledger every calculation runs against.
    #[must_use]
    pub fn ledger(&self) -> &DenominationLedger {
        &self.ledger
    }

    /// The configured remainder policy.
    #[must_use]
    pub const fn policy(&self) -> RemainderPolicy {
        self.policy
    }

    /// Normalizes and breaks down a single amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `ArithmeticOverflow` from normalization, and
    /// `UnrepresentableAmount` when the policy is `Reject` and the ledger
    /// leaves a remainder.
    pub fn breakdown_of(&self, amount: Decimal) -> Result<Breakdown, DenominationError> {
        let cents = normalize(amount)?;
        let result = breakdown(cents, &self.ledger);

        match self.policy {
            RemainderPolicy::Reject if !result.is_exact() => {
                Err(DenominationError::UnrepresentableAmount {
                    remainder_cents: result.remainder(),
                })
            }
            _ => Ok(result),
        }
    }

    /// Breaks down `amount` and, if given, diffs it against `previous`.
    ///
    /// # Errors
    ///
    /// Any error from [`DenominationService::breakdown_of`] for either amount.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_decimal_macros::dec;
    /// use denomination_core::denomination::{
    ///     DenominationLedger, DenominationService, RemainderPolicy,
    /// };
    ///
    /// let service = DenominationService::new(
    ///     Arc::new(DenominationLedger::euro()),
    ///     RemainderPolicy::Truncate,
    /// );
    /// let result = service.calculate(dec!(234.23), Some(dec!(45.32))).unwrap();
    /// assert_eq!(result.breakdown.get("200.00"), Some(1));
    /// assert_eq!(result.changes.unwrap().net_cents(), 18_891);
    /// ```
    pub fn calculate(
        &self,
        amount: Decimal,
        previous: Option<Decimal>,
    ) -> Result<DenominationResult, DenominationError> {
        let current = self.breakdown_of(amount)?;
        let changes = previous
            .map(|p| {
                self.breakdown_of(p)
                    .map(|before| diff(&current, &before, &self.ledger))
            })
            .transpose()?;

        Ok(DenominationResult {
            amount: current.amount(),
            breakdown: current,
            changes,
        })
    }
}
