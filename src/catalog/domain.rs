pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, LoanFilter};
use crate::loans::dto::LoanDto;
use crate::members::dto::MemberDto;

pub use model::Catalog;

#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto>;
    async fn add_member(&self, member_id: &str, name: &str, email: &str, phone: &str) -> LibraryResult<MemberDto>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn search_books(&self, term: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_member_by_id(&self, member_id: &str) -> LibraryResult<MemberDto>;
    async fn search_members(&self, term: &str) -> LibraryResult<MemberDto>;
    async fn checkout(&self, member_id: &str, title: &str) -> LibraryResult<LoanDto>;
    async fn return_book(&self, title: &str) -> LibraryResult<LoanDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>>;
    async fn list_loans(&self, filter: LoanFilter) -> LibraryResult<Vec<LoanDto>>;
}
