//! Banknote and coin breakdowns.
//!
//! - `amount` - decimal amounts to exact cents
//! - `ledger` - the configured set of denominations
//! - `breakdown` - greedy counts per denomination
//! - `changes` - deltas between two breakdowns
//! - `service` - request-level orchestration

pub mod amount;
pub mod breakdown;
pub mod changes;
pub mod error;
pub mod ledger;
pub mod service;

#[cfg(test)]
mod props;

pub use amount::{AmountCents, normalize, normalize_f64};
pub use breakdown::{Breakdown, breakdown};
pub use changes::{ChangeSet, diff};
pub use error::DenominationError;
pub use ledger::{Denomination, DenominationLedger};
pub use service::{DenominationResult, DenominationService, RemainderPolicy};
