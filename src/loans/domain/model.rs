use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::LoanStatus;

// Loan associates a book with the member who borrowed it. It is open until return_date is set
// and stays in the loan history afterwards.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl Loan {
    pub fn new(book_id: &str, patron_id: &str, checkout_date: NaiveDate, loan_days: i64) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            checkout_date,
            due_date: checkout_date + Duration::days(loan_days),
            return_date: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.is_open() && today > self.due_date
    }

    // whole days past the due date, zero unless overdue
    pub fn days_overdue_on(&self, today: NaiveDate) -> i64 {
        if self.is_overdue_on(today) {
            (today - self.due_date).num_days()
        } else {
            0
        }
    }

    pub fn fine_on(&self, today: NaiveDate, daily_fine: f64) -> f64 {
        self.days_overdue_on(today) as f64 * daily_fine
    }

    pub fn status_on(&self, today: NaiveDate) -> LoanStatus {
        if !self.is_open() {
            LoanStatus::Returned
        } else if self.is_overdue_on(today) {
            LoanStatus::Overdue
        } else {
            LoanStatus::OnTime
        }
    }
}

impl Identifiable for Loan {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}
