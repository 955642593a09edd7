use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;

pub struct FindMemberCommand {
    library_service: Arc<dyn LibraryService>,
}

impl FindMemberCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindMemberCommandRequest {
    pub member_id: String,
}

#[derive(Debug, Serialize)]
pub struct FindMemberCommandResponse {
    pub member: MemberDto,
}

impl FindMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<FindMemberCommandRequest, FindMemberCommandResponse> for FindMemberCommand {
    async fn execute(&self, req: FindMemberCommandRequest) -> Result<FindMemberCommandResponse, CommandError> {
        self.library_service.find_member_by_id(req.member_id.as_str())
            .await.map_err(CommandError::from).map(FindMemberCommandResponse::new)
    }
}
