use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::catalog::domain::model::Catalog;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, LoanFilter};
use crate::gateway::events::EventPublisher;
use crate::loans::domain::Loan;
use crate::loans::dto::LoanDto;
use crate::members::dto::MemberDto;

pub(crate) struct LibraryServiceImpl {
    branch_id: String,
    catalog: Arc<Mutex<Catalog>>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub(crate) fn new(config: &Configuration, catalog: Arc<Mutex<Catalog>>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog,
            events_publisher,
        }
    }

    // Every read and write of the catalog happens under this guard. It must be dropped
    // before any .await.
    fn lock(&self) -> LibraryResult<MutexGuard<'_, Catalog>> {
        Ok(self.catalog.lock()?)
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

fn to_loan_dto(catalog: &Catalog, loan: &Loan) -> Option<LoanDto> {
    let book = catalog.book(loan.book_id.as_str())?;
    let member = catalog.member(loan.patron_id.as_str())?;
    Some(LoanDto::from_loan(loan, book, member, catalog.today(), catalog.daily_fine()))
}

fn loan_dto_or_err(catalog: &Catalog, loan: &Loan) -> LibraryResult<LoanDto> {
    to_loan_dto(catalog, loan).ok_or_else(|| LibraryError::runtime(
        format!("loan {} refers to a book or member outside the catalog", loan.loan_id).as_str(), None))
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto> {
        let book = {
            let mut catalog = self.lock()?;
            BookDto::from(&catalog.add_book(isbn, title, author))
        };
        tracing::info!(book_id = book.book_id.as_str(), isbn, "book added");
        self.events_publisher.publish(&DomainEvent::added(
            "books", "catalog", book.book_id.as_str(), &self.metadata(), &book)?).await?;
        Ok(book)
    }

    async fn add_member(&self, member_id: &str, name: &str, email: &str, phone: &str) -> LibraryResult<MemberDto> {
        let member = {
            let mut catalog = self.lock()?;
            MemberDto::from(&catalog.add_member(member_id, name, email, phone))
        };
        tracing::info!(patron_id = member.patron_id.as_str(), member_id, "member added");
        self.events_publisher.publish(&DomainEvent::added(
            "members", "catalog", member.patron_id.as_str(), &self.metadata(), &member)?).await?;
        Ok(member)
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        let catalog = self.lock()?;
        catalog.find_book_by_title(title).map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("book with title {} not found", title.trim()).as_str()))
    }

    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.lock()?;
        Ok(catalog.search_books(term).iter().map(BookDto::from).collect())
    }

    async fn find_member_by_id(&self, member_id: &str) -> LibraryResult<MemberDto> {
        let catalog = self.lock()?;
        catalog.find_member_by_id(member_id).map(MemberDto::from)
            .ok_or_else(|| LibraryError::not_found(format!("member with id {} not found", member_id.trim()).as_str()))
    }

    async fn search_members(&self, term: &str) -> LibraryResult<MemberDto> {
        if term.trim().is_empty() {
            return Err(LibraryError::validation("member search term must not be empty", Some("400".to_string())));
        }
        let catalog = self.lock()?;
        if let Some(member) = catalog.find_member_by_id(term) {
            return Ok(MemberDto::from(member));
        }
        let member = catalog.members().iter().find(|m| m.name_contains(term)).map(MemberDto::from);
        member.ok_or_else(|| LibraryError::not_found(format!("no members found matching {}", term).as_str()))
    }

    async fn checkout(&self, member_id: &str, title: &str) -> LibraryResult<LoanDto> {
        let loan = {
            let mut catalog = self.lock()?;
            let member = catalog.find_member_by_id(member_id).cloned().ok_or_else(|| LibraryError::not_found(
                format!("member with id {} not found", member_id.trim()).as_str()))?;
            let book = catalog.find_book_by_title(title).cloned().ok_or_else(|| LibraryError::not_found(
                format!("book with title {} not found", title.trim()).as_str()))?;
            let loan = catalog.checkout_loan(Some(&book), Some(&member)).ok_or_else(|| LibraryError::unavailable(
                format!("book {} is not available for checkout", book.title).as_str(), Some("409".to_string()), false))?;
            loan_dto_or_err(&catalog, &loan)?
        };
        tracing::info!(loan_id = loan.loan_id.as_str(), book_id = loan.book_id.as_str(),
            patron_id = loan.patron_id.as_str(), due_date = %loan.due_date, "book checked out");
        self.events_publisher.publish(&DomainEvent::added(
            "book_checkout", "loans", loan.loan_id.as_str(), &self.metadata(), &loan)?).await?;
        Ok(loan)
    }

    async fn return_book(&self, title: &str) -> LibraryResult<LoanDto> {
        let loan = {
            let mut catalog = self.lock()?;
            let book = catalog.find_book_by_title(title).cloned().ok_or_else(|| LibraryError::not_found(
                format!("book with title {} not found", title.trim()).as_str()))?;
            let loan = catalog.return_loan(Some(&book)).ok_or_else(|| LibraryError::validation(
                format!("book {} wasn't checked out or already returned", book.title).as_str(), Some("400".to_string())))?;
            loan_dto_or_err(&catalog, &loan)?
        };
        tracing::info!(loan_id = loan.loan_id.as_str(), book_id = loan.book_id.as_str(), "book returned");
        self.events_publisher.publish(&DomainEvent::updated(
            "book_returned", "loans", loan.loan_id.as_str(), &self.metadata(), &loan)?).await?;
        Ok(loan)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.lock()?;
        Ok(catalog.books().iter().map(BookDto::from).collect())
    }

    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>> {
        let catalog = self.lock()?;
        Ok(catalog.members().iter().map(MemberDto::from).collect())
    }

    async fn list_loans(&self, filter: LoanFilter) -> LibraryResult<Vec<LoanDto>> {
        let catalog = self.lock()?;
        let loans = match filter {
            LoanFilter::All => catalog.loans(),
            LoanFilter::Current => catalog.current_loans(),
            LoanFilter::Overdue => catalog.overdue_loans(),
        };
        loans.iter().map(|l| loan_dto_or_err(&catalog, l)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use chrono::{Duration, NaiveDate};
    use crate::catalog::domain::LibraryService;
    use crate::catalog::domain::model::Catalog;
    use crate::catalog::domain::service::LibraryServiceImpl;
    use crate::core::domain::Configuration;
    use crate::core::events::DomainEventType;
    use crate::core::library::{BookStatus, LibraryError, LoanFilter, LoanStatus};
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::utils::date::ManualClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid date")
    }

    fn build_service() -> (LibraryServiceImpl, MemoryPublisher, ManualClock) {
        let config = Configuration::new("test");
        let clock = ManualClock::new(today());
        let catalog = Arc::new(Mutex::new(Catalog::with_clock(&config, Box::new(clock.clone()))));
        let publisher = MemoryPublisher::new();
        let svc = LibraryServiceImpl::new(&config, catalog, Box::new(publisher.clone()));
        (svc, publisher, clock)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let (svc, publisher, _) = build_service();
        let book = svc.add_book("978-0451524935", "1984", "George Orwell").await.expect("should add book");
        assert_eq!(BookStatus::Available, book.book_status);

        let loaded = svc.find_book_by_title("1984").await.expect("should return book");
        assert_eq!(book, loaded);
        let events = publisher.events();
        assert_eq!(1, events.len());
        assert_eq!(book.book_id, events[0].key);
        assert_eq!(Some(&"test".to_string()), events[0].metadata.get("branch_id"));
    }

    #[tokio::test]
    async fn test_should_not_find_unknown_book() {
        let (svc, _, _) = build_service();
        let res = svc.find_book_by_title("missing").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_search_books() {
        let (svc, _, _) = build_service();
        svc.add_book("978-0451524935", "1984", "George Orwell").await.expect("should add book");
        svc.add_book("978-0544003415", "The Hobbit", "J.R.R. Tolkien").await.expect("should add book");
        assert_eq!(1, svc.search_books("orwell").await.expect("should search").len());
        assert!(svc.search_books("nonexistent").await.expect("should search").is_empty());
        assert_eq!(2, svc.list_books().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_search_members_by_id_then_name() {
        let (svc, _, _) = build_service();
        svc.add_member("M001", "John Doe", "john@example.com", "555-0101").await.expect("should add member");
        svc.add_member("M002", "Jane Smith", "jane@example.com", "555-0102").await.expect("should add member");

        assert_eq!("John Doe", svc.search_members("m001").await.expect("by id").name.as_str());
        assert_eq!("Jane Smith", svc.search_members("smith").await.expect("by name").name.as_str());
        assert!(matches!(svc.search_members("nobody").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.search_members("").await, Err(LibraryError::Validation { .. })));
        assert!(matches!(svc.search_members("   ").await, Err(LibraryError::Validation { .. })));
        assert_eq!("M002", svc.find_member_by_id("M002").await.expect("by id").member_id.as_str());
        assert_eq!(2, svc.list_members().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_checkout_and_return() {
        let (svc, publisher, _) = build_service();
        svc.add_book("isbn", "title", "author").await.expect("should add book");
        svc.add_member("M001", "name", "a@b.c", "555").await.expect("should add member");

        let res = svc.return_book("title").await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));

        let loan = svc.checkout("M001", "title").await.expect("should checkout");
        assert_eq!(today() + Duration::days(14), loan.due_date);
        assert_eq!(LoanStatus::OnTime, loan.loan_status);
        let res = svc.checkout("M001", "title").await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable { .. })));

        let returned = svc.return_book("title").await.expect("should return");
        assert_eq!(loan.loan_id, returned.loan_id);
        assert_eq!(Some(today()), returned.return_date);
        assert_eq!(LoanStatus::Returned, returned.loan_status);

        let kinds: Vec<DomainEventType> = publisher.events().iter().map(|e| e.kind).collect();
        assert_eq!(vec![DomainEventType::Added, DomainEventType::Added, DomainEventType::Added, DomainEventType::Updated], kinds);
    }

    #[tokio::test]
    async fn test_should_refuse_checkout_for_unknown_member_or_book() {
        let (svc, _, _) = build_service();
        svc.add_book("isbn", "title", "author").await.expect("should add book");
        svc.add_member("M001", "name", "a@b.c", "555").await.expect("should add member");

        assert!(matches!(svc.checkout("M404", "title").await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(svc.checkout("M001", "missing").await, Err(LibraryError::NotFound { .. })));
        assert!(svc.list_loans(LoanFilter::All).await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_list_overdue_loans() {
        let (svc, _, clock) = build_service();
        svc.add_book("isbn-1", "late", "author").await.expect("should add book");
        svc.add_book("isbn-2", "fresh", "author").await.expect("should add book");
        svc.add_member("M001", "John Doe", "a@b.c", "555").await.expect("should add member");
        svc.checkout("M001", "late").await.expect("should checkout");
        clock.advance(7);
        svc.checkout("M001", "fresh").await.expect("should checkout");
        clock.advance(12);

        assert_eq!(2, svc.list_loans(LoanFilter::Current).await.expect("should list").len());
        let overdue = svc.list_loans(LoanFilter::Overdue).await.expect("should list");
        assert_eq!(1, overdue.len());
        assert_eq!("late", overdue[0].title.as_str());
        assert_eq!("John Doe", overdue[0].member_name.as_str());
        assert_eq!(LoanStatus::Overdue, overdue[0].loan_status);
        assert_eq!(5, overdue[0].days_overdue);
        assert_eq!(2.50, overdue[0].fine);

        svc.return_book("late").await.expect("should return");
        assert!(svc.list_loans(LoanFilter::Overdue).await.expect("should list").is_empty());
        assert_eq!(1, svc.list_loans(LoanFilter::Current).await.expect("should list").len());
        assert_eq!(2, svc.list_loans(LoanFilter::All).await.expect("should list").len());
    }
}
