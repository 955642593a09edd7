use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;

pub struct ListMembersCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListMembersCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl ListMembersCommandResponse {
    pub fn new(members: Vec<MemberDto>) -> Self {
        Self {
            members,
        }
    }
}

#[async_trait]
impl Command<(), ListMembersCommandResponse> for ListMembersCommand {
    async fn execute(&self, _req: ()) -> Result<ListMembersCommandResponse, CommandError> {
        self.library_service.list_members()
            .await.map_err(CommandError::from).map(ListMembersCommandResponse::new)
    }
}
