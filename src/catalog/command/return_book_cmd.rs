use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::loans::dto::LoanDto;

pub struct ReturnBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ReturnBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    title: String,
}

impl ReturnBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library_service.return_book(req.title.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::factory::{create_catalog, create_library_service};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_return_book() {
        let config = Configuration::new("test");
        let svc = create_library_service(&config, create_catalog(&config), GatewayPublisherVia::Memory);
        svc.add_member("M001", "John Doe", "john@example.com", "555-0101").await.expect("should add member");
        svc.add_book("978-0544003415", "The Hobbit", "J.R.R. Tolkien").await.expect("should add book");
        let checkout_cmd = CheckoutBookCommand::new(svc.clone());
        let return_cmd = ReturnBookCommand::new(svc);

        let res = return_cmd.execute(ReturnBookCommandRequest::new("The Hobbit")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));

        let checkout = checkout_cmd.execute(CheckoutBookCommandRequest::new("M001", "The Hobbit"))
            .await.expect("should checkout book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("the hobbit")).await.expect("should return book");
        assert_eq!(checkout.loan.loan_id, res.loan.loan_id);
        assert_eq!(LoanStatus::Returned, res.loan.loan_status);
        assert!(res.loan.return_date.is_some());

        let res = return_cmd.execute(ReturnBookCommandRequest::new("The Hobbit")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        let res = return_cmd.execute(ReturnBookCommandRequest::new("Unknown")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
