use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct CheckoutBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl CheckoutBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    member_id: String,
    title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(member_id: &str, title: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub loan: LoanDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.library_service.checkout(req.member_id.as_str(), req.title.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
