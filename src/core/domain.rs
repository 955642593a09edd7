use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_LOAN_DAYS: i64 = 14;
pub const DEFAULT_DAILY_FINE: f64 = 0.50;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub book_loan_days: i64,
    pub daily_fine: f64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            book_loan_days: DEFAULT_LOAN_DAYS,
            daily_fine: DEFAULT_DAILY_FINE,
        }
    }
}
