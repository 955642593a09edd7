use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// Member abstracts a library member. member_id is the card number handed out at the desk and
// is not unique; patron_id is the identity loans refer to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Member {
    pub patron_id: String,
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Member {
    pub fn new(member_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            member_id: member_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    // case-insensitive exact match against the trimmed member id
    pub fn has_member_id(&self, member_id: &str) -> bool {
        self.member_id.to_lowercase() == member_id.trim().to_lowercase()
    }

    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

impl Identifiable for Member {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::members::domain::model::Member;

    #[tokio::test]
    async fn test_should_build_member() {
        let member = Member::new("M001", "John Doe", "john@example.com", "555-0101");
        assert_eq!("M001", member.member_id.as_str());
        assert_eq!("John Doe", member.name.as_str());
        assert_eq!("john@example.com", member.email.as_str());
        assert_eq!("555-0101", member.phone.as_str());
        assert!(!member.patron_id.is_empty());
    }

    #[tokio::test]
    async fn test_should_match_member_id() {
        let member = Member::new("M001", "John Doe", "john@example.com", "555-0101");
        assert!(member.has_member_id("m001"));
        assert!(member.has_member_id(" M001 "));
        assert!(!member.has_member_id("M00"));
    }

    #[tokio::test]
    async fn test_should_match_name() {
        let member = Member::new("M002", "Jane Smith", "jane@example.com", "555-0102");
        assert!(member.name_contains("smith"));
        assert!(!member.name_contains("doe"));
    }
}
