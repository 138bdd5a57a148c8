//! `loan_amort` is a Rust library for fixed-rate loan amortization.
//!
//! It computes, for a loan with a fixed nominal annual rate and a fixed term
//! in months:
//! - the fixed monthly payment (annuity formula, straight-line when the rate
//!   is zero),
//! - the full per-period schedule of principal/interest/remaining balance,
//! - the split of a concrete payment applied against a live balance, with
//!   explicit overpayment reporting and rejection of payments that do not
//!   cover accrued interest.
//!
//! All operations are pure functions of their inputs: no I/O, no shared
//! state, safe to call concurrently. Persistence and transport belong to the
//! hosting application.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use loan_amort::{apply_payment, generate_schedule, DebtState, LoanTerms, PaymentRecord};
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms::new(
//!     dec!(12000),
//!     dec!(12),
//!     12,
//!     NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
//! )
//! .unwrap();
//!
//! let schedule = generate_schedule(&terms).unwrap();
//! assert_eq!(schedule.len(), 12);
//! assert_eq!(schedule[0].interest_portion, dec!(120.00));
//!
//! let debt = DebtState::new(terms);
//! let payment = PaymentRecord {
//!     debt_id: 1,
//!     payment_date: NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
//!     amount: dec!(1066.19),
//! };
//! let (debt, breakdown) = apply_payment(&debt, &payment).unwrap();
//! assert_eq!(breakdown.principal_portion, dec!(946.19));
//! assert_eq!(debt.current_balance, dec!(11053.81));
//! ```
//!
//! A chain of payments must be applied in chronological order, each call fed
//! the state returned by the previous one: interest accrues on whatever the
//! current balance is, so application is not commutative.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod payment;
pub mod schedule;

pub use error::{LoanError, Result};
pub use model::{AmortizationRow, DebtState, DebtStatus, LoanTerms, PaymentRecord};
pub use payment::{apply_payment, apply_payment_with, PaymentBreakdown, ShortfallPolicy};
pub use schedule::{
    generate_schedule, monthly_payment, schedule_summary, Schedule, ScheduleSummary,
};
