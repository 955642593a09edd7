use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// Book abstracts a physical book in the catalog. The ISBN is the business key but is not
// unique, so two copies with the same ISBN are told apart by book_id.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            available: true,
        }
    }

    pub fn status(&self) -> BookStatus {
        BookStatus::from_available(self.available)
    }

    // case-insensitive exact match against the trimmed title
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    // title and author match without case, isbn matches as written
    pub fn matches(&self, term: &str) -> bool {
        let lower = term.to_lowercase();
        self.title.to_lowercase().contains(&lower) ||
            self.author.to_lowercase().contains(&lower) ||
            self.isbn.contains(term)
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}
