use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;

// SearchMembersCommand looks a member up by id first and falls back to the first name match.
pub struct SearchMembersCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SearchMembersCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchMembersCommandRequest {
    pub term: String,
}

#[derive(Debug, Serialize)]
pub struct SearchMembersCommandResponse {
    pub member: MemberDto,
}

impl SearchMembersCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<SearchMembersCommandRequest, SearchMembersCommandResponse> for SearchMembersCommand {
    async fn execute(&self, req: SearchMembersCommandRequest) -> Result<SearchMembersCommandResponse, CommandError> {
        self.library_service.search_members(req.term.as_str())
            .await.map_err(CommandError::from).map(SearchMembersCommandResponse::new)
    }
}
