use serde::{Deserialize, Serialize};
use crate::members::domain::Member;

// MemberDto is a data transfer object for the library service
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberDto {
    pub patron_id: String,
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Member> for MemberDto {
    fn from(other: &Member) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            member_id: other.member_id.to_string(),
            name: other.name.to_string(),
            email: other.email.to_string(),
            phone: other.phone.to_string(),
        }
    }
}
