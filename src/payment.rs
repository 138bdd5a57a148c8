//! Applying a recorded payment against a live debt balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LoanError, Result};
use crate::model::{DebtState, PaymentRecord};

/// What to do when a payment does not cover the interest accrued for the
/// period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortfallPolicy {
    /// Fail with [`LoanError::InterestOnlyShortfall`]. The default.
    Reject,
    /// Capitalize the shortfall onto the balance (negative amortization).
    /// Only for callers that explicitly want a growing balance.
    Capitalize,
}

/// The interest/principal split of one applied payment, for recording
/// alongside the payment itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub interest_portion: Decimal,
    /// Negative only under [`ShortfallPolicy::Capitalize`].
    pub principal_portion: Decimal,
    pub remaining_balance: Decimal,
    /// Surplus beyond payoff, zero unless the payment overshot the balance.
    pub overpayment: Decimal,
}

/// Applies a payment to a debt, rejecting interest-only shortfalls.
///
/// See [`apply_payment_with`] for the full contract.
pub fn apply_payment(
    state: &DebtState,
    payment: &PaymentRecord,
) -> Result<(DebtState, PaymentBreakdown)> {
    apply_payment_with(state, payment, ShortfallPolicy::Reject)
}

/// Applies a payment to a debt and returns the updated state plus the
/// interest/principal split.
///
/// Interest for the period accrues on the current balance at the loan's
/// monthly rate; the rest of the payment goes to principal. A payment that
/// overshoots the balance pays the debt down to exactly zero and the surplus
/// comes back as [`PaymentBreakdown::overpayment`] rather than being silently
/// absorbed. The input state is never mutated; sequencing a chain of payments
/// (each fed the previous result) is the caller's responsibility, since
/// application is not commutative.
///
/// # Errors
///
/// - [`LoanError::InvalidPayment`] if `payment.amount` is not positive.
/// - [`LoanError::DebtAlreadyPaidOff`] if the balance is already zero;
///   paid-off is terminal.
/// - [`LoanError::InterestOnlyShortfall`] if the payment does not cover
///   accrued interest and `policy` is [`ShortfallPolicy::Reject`].
pub fn apply_payment_with(
    state: &DebtState,
    payment: &PaymentRecord,
    policy: ShortfallPolicy,
) -> Result<(DebtState, PaymentBreakdown)> {
    if payment.amount <= Decimal::ZERO {
        return Err(LoanError::InvalidPayment(format!(
            "amount must be positive, got {}",
            payment.amount
        )));
    }
    if state.current_balance == Decimal::ZERO {
        return Err(LoanError::DebtAlreadyPaidOff);
    }

    let interest_portion = (state.current_balance * state.terms.monthly_rate()).round_dp(2);
    let mut principal_portion = payment.amount - interest_portion;
    let mut overpayment = Decimal::ZERO;

    if principal_portion < Decimal::ZERO && policy == ShortfallPolicy::Reject {
        return Err(LoanError::InterestOnlyShortfall {
            payment: payment.amount,
            interest: interest_portion,
        });
    }
    if principal_portion > state.current_balance {
        overpayment = principal_portion - state.current_balance;
        principal_portion = state.current_balance;
    }

    let remaining_balance = state.current_balance - principal_portion;
    let updated = DebtState {
        terms: state.terms.clone(),
        current_balance: remaining_balance,
    };
    let breakdown = PaymentBreakdown {
        interest_portion,
        principal_portion,
        remaining_balance,
        overpayment,
    };
    Ok((updated, breakdown))
}
