use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::LoanStatus;
use crate::loans::domain::Loan;
use crate::members::domain::Member;

// LoanDto joins a loan with its book and member, and carries the overdue figures as of
// the day it was built.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub patron_id: String,
    pub member_id: String,
    pub member_name: String,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub loan_status: LoanStatus,
    pub days_overdue: i64,
    pub fine: f64,
}

impl LoanDto {
    pub fn from_loan(loan: &Loan, book: &Book, member: &Member, today: NaiveDate, daily_fine: f64) -> Self {
        Self {
            loan_id: loan.loan_id.to_string(),
            book_id: loan.book_id.to_string(),
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            patron_id: loan.patron_id.to_string(),
            member_id: member.member_id.to_string(),
            member_name: member.name.to_string(),
            checkout_date: loan.checkout_date,
            due_date: loan.due_date,
            return_date: loan.return_date,
            loan_status: loan.status_on(today),
            days_overdue: loan.days_overdue_on(today),
            fine: loan.fine_on(today, daily_fine),
        }
    }
}
