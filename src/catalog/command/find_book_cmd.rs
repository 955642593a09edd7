use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct FindBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl FindBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBookCommandRequest {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct FindBookCommandResponse {
    pub book: BookDto,
}

impl FindBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        self.library_service.find_book_by_title(req.title.as_str())
            .await.map_err(CommandError::from).map(FindBookCommandResponse::new)
    }
}
