use chrono::NaiveDate;
use crate::books::domain::Book;
use crate::core::domain::Configuration;
use crate::core::repository::InMemoryRepository;
use crate::loans::domain::Loan;
use crate::members::domain::Member;
use crate::utils::date::{Clock, SystemClock};

/// Catalog owns the books, members and loan history of one library branch.
///
/// Lookups never fail: absence is `None` and refused checkouts or returns are `false`.
/// A book is unavailable exactly while an open loan refers to it; checkout and return
/// are the only places that flip the flag, each together with its loan update.
pub struct Catalog {
    books: InMemoryRepository<Book>,
    members: InMemoryRepository<Member>,
    loans: InMemoryRepository<Loan>,
    book_loan_days: i64,
    daily_fine: f64,
    clock: Box<dyn Clock>,
}

impl Catalog {
    pub fn new(config: &Configuration) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Configuration, clock: Box<dyn Clock>) -> Self {
        Self {
            books: InMemoryRepository::new(),
            members: InMemoryRepository::new(),
            loans: InMemoryRepository::new(),
            book_loan_days: config.book_loan_days,
            daily_fine: config.daily_fine,
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn daily_fine(&self) -> f64 {
        self.daily_fine
    }

    pub fn add_book(&mut self, isbn: &str, title: &str, author: &str) -> Book {
        self.books.create(Book::new(isbn, title, author)).clone()
    }

    pub fn add_member(&mut self, member_id: &str, name: &str, email: &str, phone: &str) -> Member {
        self.members.create(Member::new(member_id, name, email, phone)).clone()
    }

    pub fn find_book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.find_first(|b| b.has_title(title))
    }

    pub fn search_books(&self, term: &str) -> Vec<Book> {
        self.books.query(|b| b.matches(term))
    }

    pub fn find_member_by_id(&self, member_id: &str) -> Option<&Member> {
        self.members.find_first(|m| m.has_member_id(member_id))
    }

    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.get(book_id)
    }

    pub fn member(&self, patron_id: &str) -> Option<&Member> {
        self.members.get(patron_id)
    }

    pub fn checkout(&mut self, book: Option<&Book>, member: Option<&Member>) -> bool {
        self.checkout_loan(book, member).is_some()
    }

    /// Lends `book` to `member` and returns the new loan.
    ///
    /// Availability is read from the stored book rather than the caller's copy, so a stale
    /// snapshot cannot lend a book twice. Both references must belong to this catalog.
    pub fn checkout_loan(&mut self, book: Option<&Book>, member: Option<&Member>) -> Option<Loan> {
        let (book, member) = (book?, member?);
        self.members.get(member.patron_id.as_str())?;
        let today = self.clock.today();
        let stored = self.books.get_mut(book.book_id.as_str())?;
        if !stored.available {
            return None;
        }
        stored.available = false;
        let loan = Loan::new(stored.book_id.as_str(), member.patron_id.as_str(), today, self.book_loan_days);
        Some(self.loans.create(loan).clone())
    }

    pub fn return_book(&mut self, book: Option<&Book>) -> bool {
        self.return_loan(book).is_some()
    }

    /// Closes the first open loan of `book` in history order and returns it.
    ///
    /// Whoever brings the book back closes the loan; the borrower is not checked.
    pub fn return_loan(&mut self, book: Option<&Book>) -> Option<Loan> {
        let book_id = book?.book_id.as_str();
        let today = self.clock.today();
        let loan = self.loans.find_first_mut(|l| l.book_id == book_id && l.is_open())?;
        loan.return_date = Some(today);
        let returned = loan.clone();
        if let Some(stored) = self.books.get_mut(book_id) {
            stored.available = true;
        }
        Some(returned)
    }

    pub fn current_loans(&self) -> Vec<Loan> {
        self.loans.query(Loan::is_open)
    }

    pub fn overdue_loans(&self) -> Vec<Loan> {
        let today = self.clock.today();
        self.loans.query(|l| l.is_overdue_on(today))
    }

    pub fn is_overdue(&self, loan: &Loan) -> bool {
        loan.is_overdue_on(self.clock.today())
    }

    pub fn days_overdue(&self, loan: &Loan) -> i64 {
        loan.days_overdue_on(self.clock.today())
    }

    pub fn fine(&self, loan: &Loan) -> f64 {
        loan.fine_on(self.clock.today(), self.daily_fine)
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.all()
    }

    pub fn members(&self) -> Vec<Member> {
        self.members.all()
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.loans.all()
    }
}
