//! Monthly payment computation and amortization schedule generation.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{LoanError, Result};
use crate::model::{AmortizationRow, LoanTerms};

/// Computes the fixed monthly payment for an amortizing loan.
///
/// The periodic rate is `annual_rate_percent / 100 / 12`.
/// With a zero rate the loan is straight-line: `principal / term_months`.
/// Otherwise the annuity formula applies:
///
/// `PMT = P * [r(1 + r)^n] / [(1 + r)^n - 1]`
///
/// The result keeps full precision; round to 2 decimal places only at the
/// point of display or storage, so rounding error does not compound across a
/// schedule.
///
/// # Errors
///
/// Returns [`LoanError::InvalidLoanTerms`] for a non-positive principal,
/// zero term or negative rate.
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<Decimal> {
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

    let monthly_rate = annual_rate_percent / dec!(100) / dec!(12);
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let r_plus_1_pow_n = (dec!(1) + monthly_rate).powu(term_months.into());
    Ok(principal * (monthly_rate * r_plus_1_pow_n) / (r_plus_1_pow_n - dec!(1)))
}

/// Lazy, finite, restartable amortization schedule.
///
/// Yields at most `term_months` rows, fewer if the balance reaches zero
/// early. The iterator owns all of its state, so cloning it (or rebuilding it
/// from the same terms) restarts the identical sequence.
#[derive(Debug, Clone)]
pub struct Schedule {
    payment: Decimal,
    monthly_rate: Decimal,
    balance: Decimal,
    term_months: u32,
    period: u32,
    date: NaiveDate,
}

impl Schedule {
    /// # Errors
    ///
    /// Returns [`LoanError::InvalidLoanTerms`] for terms that fail the
    /// [`monthly_payment`] validation.
    pub fn new(terms: &LoanTerms) -> Result<Self> {
        let payment =
            monthly_payment(terms.principal, terms.annual_rate_percent, terms.term_months)?
                .round_dp(2);
        Ok(Self {
            payment,
            monthly_rate: terms.monthly_rate(),
            balance: terms.principal,
            term_months: terms.term_months,
            period: 0,
            date: terms.start_date,
        })
    }

    /// The fixed payment amount (2 decimal places) used for every row except
    /// possibly the last one.
    pub fn payment(&self) -> Decimal {
        self.payment
    }
}

impl Iterator for Schedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        if self.period >= self.term_months || self.balance <= Decimal::ZERO {
            return None;
        }
        self.period += 1;
        // Overflow is only possible at the far end of chrono's date range.
        self.date = self
            .date
            .checked_add_months(Months::new(1))
            .unwrap_or(self.date);

        let interest_portion = (self.balance * self.monthly_rate).round_dp(2);
        let mut principal_portion = self.payment - interest_portion;
        let mut payment_amount = self.payment;

        // The last row absorbs the rounding remainder so the principal
        // portions sum exactly to the principal and the balance lands on 0.
        if self.period == self.term_months || principal_portion > self.balance {
            principal_portion = self.balance;
            payment_amount = principal_portion + interest_portion;
        }

        self.balance -= principal_portion;

        Some(AmortizationRow {
            payment_number: self.period,
            date: self.date,
            payment_amount,
            principal_portion,
            interest_portion,
            remaining_balance: self.balance,
        })
    }
}

/// Collects the full schedule for a loan into a vector.
///
/// # Errors
///
/// Returns [`LoanError::InvalidLoanTerms`] for invalid terms.
pub fn generate_schedule(terms: &LoanTerms) -> Result<Vec<AmortizationRow>> {
    Ok(Schedule::new(terms)?.collect())
}

/// Whole-life figures for a loan, folded from its schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// The fixed monthly payment, rounded to 2 decimal places.
    pub monthly_payment: Decimal,
    /// Sum of every payment over the life of the loan.
    pub total_paid: Decimal,
    /// `total_paid - principal`.
    pub total_interest: Decimal,
    /// Due date of the final payment.
    pub payoff_date: NaiveDate,
    /// Number of payments actually made (≤ `term_months`).
    pub periods: u32,
}

/// Summarizes a loan: payment amount, lifetime totals and payoff date.
///
/// # Errors
///
/// Returns [`LoanError::InvalidLoanTerms`] for invalid terms.
pub fn schedule_summary(terms: &LoanTerms) -> Result<ScheduleSummary> {
    let schedule = Schedule::new(terms)?;
    let monthly_payment = schedule.payment();

    let mut total_paid = Decimal::ZERO;
    let mut payoff_date = terms.start_date;
    let mut periods = 0;
    for row in schedule {
        total_paid += row.payment_amount;
        payoff_date = row.date;
        periods += 1;
    }

    Ok(ScheduleSummary {
        monthly_payment,
        total_paid,
        total_interest: total_paid - terms.principal,
        payoff_date,
        periods,
    })
}
