//! Driving a debt from creation to payoff through the public API.

use chrono::NaiveDate;
use loan_amort::{
    apply_payment, generate_schedule, DebtState, DebtStatus, LoanError, LoanTerms, PaymentRecord,
};
use rust_decimal_macros::dec;

#[test]
fn scheduled_payments_pay_the_loan_off() {
    let terms = LoanTerms::new(
        dec!(12000),
        dec!(12),
        12,
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    )
    .unwrap();
    let schedule = generate_schedule(&terms).unwrap();
    let mut state = DebtState::new(terms);

    for row in &schedule {
        let payment = PaymentRecord {
            debt_id: 7,
            payment_date: row.date,
            amount: row.payment_amount,
        };
        let (next, breakdown) = apply_payment(&state, &payment).unwrap();

        // Applying the scheduled payment reproduces the schedule's split.
        assert_eq!(breakdown.interest_portion, row.interest_portion);
        assert_eq!(breakdown.principal_portion, row.principal_portion);
        assert_eq!(breakdown.overpayment, dec!(0));
        assert_eq!(next.current_balance, row.remaining_balance);
        assert!(next.current_balance >= dec!(0));

        state = next;
    }

    assert_eq!(state.current_balance, dec!(0));
    assert_eq!(state.status(), DebtStatus::PaidOff);

    // Paid-off is terminal.
    let extra = PaymentRecord {
        debt_id: 7,
        payment_date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
        amount: dec!(50),
    };
    assert_eq!(
        apply_payment(&state, &extra).unwrap_err(),
        LoanError::DebtAlreadyPaidOff
    );
}

#[test]
fn extra_principal_shortens_the_loan() {
    let terms = LoanTerms::new(
        dec!(1000),
        dec!(0),
        10,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    )
    .unwrap();
    let mut state = DebtState::new(terms);

    // Double payments on an interest-free loan: paid off in 5 instead of 10.
    for month in 0..5 {
        let payment = PaymentRecord {
            debt_id: 3,
            payment_date: NaiveDate::from_ymd_opt(2025, 2 + month, 1).unwrap(),
            amount: dec!(200),
        };
        let (next, _) = apply_payment(&state, &payment).unwrap();
        state = next;
    }

    assert_eq!(state.status(), DebtStatus::PaidOff);
}
