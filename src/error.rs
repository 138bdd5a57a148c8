//! Error taxonomy of the public API.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// Non-positive principal, zero term or negative rate. Rejected before
    /// any computation takes place.
    #[error("invalid loan terms: {0}")]
    InvalidLoanTerms(String),

    /// Non-positive payment amount.
    #[error("invalid payment: {0}")]
    InvalidPayment(String),

    /// The payment does not cover the interest accrued for the period, so
    /// applying it would grow the balance. Surfaced instead of silently
    /// negative-amortizing; see `ShortfallPolicy::Capitalize` for the opt-in.
    #[error("payment of {payment} does not cover accrued interest of {interest}")]
    InterestOnlyShortfall { payment: Decimal, interest: Decimal },

    /// Payment attempted against a debt whose balance is already zero.
    #[error("debt is already paid off")]
    DebtAlreadyPaidOff,
}

pub type Result<T> = std::result::Result<T, LoanError>;
