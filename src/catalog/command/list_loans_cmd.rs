use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LoanFilter;
use crate::loans::dto::LoanDto;

pub struct ListLoansCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListLoansCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListLoansCommandRequest {
    #[serde(default)]
    pub status: LoanFilter,
}

impl ListLoansCommandRequest {
    pub fn new(status: LoanFilter) -> Self {
        Self {
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListLoansCommandResponse {
    pub loans: Vec<LoanDto>,
}

impl ListLoansCommandResponse {
    pub fn new(loans: Vec<LoanDto>) -> Self {
        Self {
            loans,
        }
    }
}

#[async_trait]
impl Command<ListLoansCommandRequest, ListLoansCommandResponse> for ListLoansCommand {
    async fn execute(&self, req: ListLoansCommandRequest) -> Result<ListLoansCommandResponse, CommandError> {
        self.library_service.list_loans(req.status)
            .await.map_err(CommandError::from).map(ListLoansCommandResponse::new)
    }
}
