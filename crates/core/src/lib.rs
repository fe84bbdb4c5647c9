//! Core business logic for the denomination service.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Amount normalization, the denomination ledger, breakdowns and change
//! sets all live here.
//!
//! # Modules
//!
//! - `denomination` - Breaking amounts into banknotes and coins

pub mod denomination;

pub use denomination::{
    AmountCents, Breakdown, ChangeSet, Denomination, DenominationError, DenominationLedger,
    DenominationResult, DenominationService, RemainderPolicy,
};
