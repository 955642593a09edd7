pub mod model;

pub use model::Loan;
