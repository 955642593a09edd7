pub mod add_book_cmd;
pub mod add_member_cmd;
pub mod checkout_book_cmd;
pub mod find_book_cmd;
pub mod find_member_cmd;
pub mod list_books_cmd;
pub mod list_loans_cmd;
pub mod list_members_cmd;
pub mod return_book_cmd;
pub mod search_books_cmd;
pub mod search_members_cmd;
