//! Domain records exchanged with the hosting application.
//!
//! Money fields are `rust_decimal::Decimal`, dates are `chrono::NaiveDate`,
//! and everything derives serde so the hosting application can map these
//! records straight onto its HTTP bodies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{LoanError, Result};

/// Fixed terms of a loan, immutable once the debt is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// The original amount borrowed.
    pub principal: Decimal,
    /// Nominal annual interest rate as a percentage (e.g. 12.0 for 12%).
    pub annual_rate_percent: Decimal,
    /// The total number of monthly payments.
    pub term_months: u32,
    /// Date the loan starts; payment i falls i calendar months after it.
    pub start_date: NaiveDate,
}

impl LoanTerms {
    /// Validates and builds loan terms.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidLoanTerms`] if `principal` is not
    /// positive, `term_months` is zero, or `annual_rate_percent` is negative.
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(LoanError::InvalidLoanTerms(format!(
                "principal must be positive, got {principal}"
            )));
        }
        if term_months == 0 {
            return Err(LoanError::InvalidLoanTerms(
                "term must be at least one month".into(),
            ));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(LoanError::InvalidLoanTerms(format!(
                "annual rate cannot be negative, got {annual_rate_percent}"
            )));
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
            start_date,
        })
    }

    /// Periodic (monthly) rate as a decimal factor: `annual / 100 / 12`.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / dec!(100) / dec!(12)
    }
}

/// Whether a debt still carries a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    Active,
    PaidOff,
}

/// A debt's live state: its fixed terms plus the outstanding balance.
///
/// The balance starts at `principal` and only moves through
/// [`apply_payment`](crate::payment::apply_payment); it can reach exactly
/// zero but never goes negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtState {
    pub terms: LoanTerms,
    pub current_balance: Decimal,
}

impl DebtState {
    /// A freshly created debt: balance equal to the principal.
    pub fn new(terms: LoanTerms) -> Self {
        let current_balance = terms.principal;
        Self {
            terms,
            current_balance,
        }
    }

    /// Rebuilds a debt at a known balance (e.g. loaded from the backend).
    ///
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidLoanTerms`] if `balance` is negative.
    pub fn with_balance(terms: LoanTerms, balance: Decimal) -> Result<Self> {
        if balance < Decimal::ZERO {
            return Err(LoanError::InvalidLoanTerms(format!(
                "balance cannot be negative, got {balance}"
            )));
        }
        Ok(Self {
            terms,
            current_balance: balance,
        })
    }

    pub fn status(&self) -> DebtStatus {
        if self.current_balance == Decimal::ZERO {
            DebtStatus::PaidOff
        } else {
            DebtStatus::Active
        }
    }
}

/// A payment event recorded by the user against a debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub debt_id: u64,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
}

/// One period of an amortization schedule.
///
/// `principal_portion + interest_portion == payment_amount`, and each row's
/// `remaining_balance` is the previous row's minus this row's
/// `principal_portion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period number.
    pub payment_number: u32,
    /// Due date: `start_date` plus `payment_number` calendar months.
    pub date: NaiveDate,
    pub payment_amount: Decimal,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    pub remaining_balance: Decimal,
}
