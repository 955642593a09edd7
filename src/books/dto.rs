use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for the library service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.status(),
        }
    }
}
