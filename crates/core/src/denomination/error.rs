//! Denomination error types.

use thiserror::Error;

use denomination_shared::AppError;

/// Errors that can occur while normalizing amounts or building a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenominationError {
    /// Amount is negative, NaN or infinite.
    #[error("Amount must be a finite, non-negative number")]
    InvalidAmount,

    /// Denomination ledger is empty or holds an invalid value.
    #[error("Invalid denomination configuration: {0}")]
    Configuration(String),

    /// Amount does not fit the internal minor-unit range.
    #[error("Amount is too large to convert to minor units")]
    ArithmeticOverflow,

    /// Ledger cannot represent the whole amount.
    #[error("Amount cannot be represented by the configured denominations ({remainder_cents} minor units left over)")]
    UnrepresentableAmount {
        /// Minor units left after the smallest denomination.
        remainder_cents: i64,
    },
}

impl From<DenominationError> for AppError {
    fn from(err: DenominationError) -> Self {
        match err {
            DenominationError::InvalidAmount | DenominationError::ArithmeticOverflow => {
                Self::Validation(err.to_string())
            }
            DenominationError::UnrepresentableAmount { .. } => Self::BusinessRule(err.to_string()),
            DenominationError::Configuration(_) => Self::Internal(err.to_string()),
        }
    }
}
