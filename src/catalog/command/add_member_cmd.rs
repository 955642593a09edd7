use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;

pub struct AddMemberCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddMemberCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddMemberCommandRequest {
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl AddMemberCommandRequest {
    pub fn new(member_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: MemberDto,
}

impl AddMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand {
    async fn execute(&self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        self.library_service.add_member(req.member_id.as_str(), req.name.as_str(),
                                        req.email.as_str(), req.phone.as_str())
            .await.map_err(CommandError::from).map(AddMemberCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
    use crate::catalog::factory::{create_catalog, create_library_service};
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_run_add_member() {
        let config = Configuration::new("test");
        let svc = create_library_service(&config, create_catalog(&config), GatewayPublisherVia::Memory);
        let cmd = AddMemberCommand::new(svc.clone());

        let res = cmd.execute(AddMemberCommandRequest::new("M001", "John Doe", "john@example.com", "555-0101"))
            .await.expect("should add member");
        assert_eq!("M001", res.member.member_id.as_str());
        assert_eq!(res.member, svc.find_member_by_id("m001").await.expect("should find member"));
    }
}
