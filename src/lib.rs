pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod loans;
pub mod members;
pub mod utils;
