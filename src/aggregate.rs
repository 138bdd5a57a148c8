//! Shared aggregation helpers.
//!
//! Totals, date-range filtering and progress percentages used across the
//! hosting application's views, collected here so each view does not reduce
//! over its lists ad hoc.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{DebtState, DebtStatus};
use crate::schedule::monthly_payment;

/// Sums an amount projected out of each item.
pub fn total_by<T>(items: &[T], amount: impl Fn(&T) -> Decimal) -> Decimal {
    items.iter().map(amount).sum()
}

/// Sums amounts for items whose date falls within `[from, to]` inclusive.
pub fn total_in_range<T>(
    items: &[T],
    date: impl Fn(&T) -> NaiveDate,
    amount: impl Fn(&T) -> Decimal,
    from: NaiveDate,
    to: NaiveDate,
) -> Decimal {
    items
        .iter()
        .filter(|item| {
            let d = date(item);
            d >= from && d <= to
        })
        .map(amount)
        .sum()
}

/// Progress toward a target as a percentage. Zero when the target is zero.
pub fn progress_percent(current: Decimal, target: Decimal) -> Decimal {
    if target.is_zero() {
        return Decimal::ZERO;
    }
    current / target * dec!(100)
}

/// How much of a debt's principal has been paid down, as a percentage.
pub fn payoff_progress(debt: &DebtState) -> Decimal {
    progress_percent(
        debt.terms.principal - debt.current_balance,
        debt.terms.principal,
    )
}

/// Portfolio-level figures across a set of debts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPortfolioStats {
    pub total_balance: Decimal,
    pub total_principal: Decimal,
    /// `total_principal - total_balance`.
    pub total_paid: Decimal,
    /// Sum of the fixed monthly payments of all debts.
    pub total_monthly_payment: Decimal,
    pub active_debts: usize,
    pub paid_off_debts: usize,
}

/// Aggregates a set of debts into portfolio totals.
///
/// # Errors
///
/// Returns [`LoanError::InvalidLoanTerms`](crate::LoanError::InvalidLoanTerms)
/// if any debt carries invalid terms.
pub fn debt_portfolio_stats(debts: &[DebtState]) -> Result<DebtPortfolioStats> {
    let total_balance = total_by(debts, |d| d.current_balance);
    let total_principal = total_by(debts, |d| d.terms.principal);

    let mut total_monthly_payment = Decimal::ZERO;
    for debt in debts {
        total_monthly_payment += monthly_payment(
            debt.terms.principal,
            debt.terms.annual_rate_percent,
            debt.terms.term_months,
        )?
        .round_dp(2);
    }

    let active_debts = debts
        .iter()
        .filter(|d| d.status() == DebtStatus::Active)
        .count();

    Ok(DebtPortfolioStats {
        total_balance,
        total_principal,
        total_paid: total_principal - total_balance,
        total_monthly_payment,
        active_debts,
        paid_off_debts: debts.len() - active_debts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoanTerms;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Entry {
        date: NaiveDate,
        amount: Decimal,
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                date: date(2025, 1, 5),
                amount: dec!(120.50),
            },
            Entry {
                date: date(2025, 1, 20),
                amount: dec!(79.50),
            },
            Entry {
                date: date(2025, 2, 2),
                amount: dec!(300),
            },
        ]
    }

    #[test]
    fn totals_over_all_items() {
        assert_eq!(total_by(&entries(), |e| e.amount), dec!(500.00));
        let empty: Vec<Entry> = Vec::new();
        assert_eq!(total_by(&empty, |e| e.amount), dec!(0));
    }

    #[test]
    fn totals_within_inclusive_range() {
        let total = total_in_range(
            &entries(),
            |e| e.date,
            |e| e.amount,
            date(2025, 1, 1),
            date(2025, 1, 31),
        );
        assert_eq!(total, dec!(200.00));

        // Boundaries are inclusive.
        let single = total_in_range(
            &entries(),
            |e| e.date,
            |e| e.amount,
            date(2025, 2, 2),
            date(2025, 2, 2),
        );
        assert_eq!(single, dec!(300));
    }

    #[test]
    fn progress_handles_zero_target() {
        assert_eq!(progress_percent(dec!(50), dec!(200)), dec!(25));
        assert_eq!(progress_percent(dec!(10), dec!(0)), dec!(0));
    }

    #[test]
    fn payoff_progress_from_balance() {
        let terms = LoanTerms::new(dec!(10000), dec!(12), 12, date(2025, 1, 15)).unwrap();
        let debt = DebtState::with_balance(terms, dec!(7500)).unwrap();
        assert_eq!(payoff_progress(&debt), dec!(25));
    }

    #[test]
    fn portfolio_stats_across_debts() {
        let active = DebtState::with_balance(
            LoanTerms::new(dec!(12000), dec!(12), 12, date(2025, 1, 15)).unwrap(),
            dec!(6000),
        )
        .unwrap();
        let paid_off = DebtState::with_balance(
            LoanTerms::new(dec!(1000), dec!(0), 10, date(2024, 6, 1)).unwrap(),
            dec!(0),
        )
        .unwrap();

        let stats = debt_portfolio_stats(&[active, paid_off]).unwrap();
        assert_eq!(stats.total_balance, dec!(6000));
        assert_eq!(stats.total_principal, dec!(13000));
        assert_eq!(stats.total_paid, dec!(7000));
        // 1066.19 for the active loan plus 100.00 for the interest-free one.
        assert_eq!(stats.total_monthly_payment, dec!(1166.19));
        assert_eq!(stats.active_debts, 1);
        assert_eq!(stats.paid_off_debts, 1);
    }
}
