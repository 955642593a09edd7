use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest, AddMemberCommandResponse};
use crate::catalog::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::catalog::command::find_book_cmd::{FindBookCommand, FindBookCommandRequest, FindBookCommandResponse};
use crate::catalog::command::find_member_cmd::{FindMemberCommand, FindMemberCommandRequest, FindMemberCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandResponse};
use crate::catalog::command::list_loans_cmd::{ListLoansCommand, ListLoansCommandRequest, ListLoansCommandResponse};
use crate::catalog::command::list_members_cmd::{ListMembersCommand, ListMembersCommandResponse};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::search_members_cmd::{SearchMembersCommand, SearchMembersCommandRequest, SearchMembersCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    q: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", post(add_book).get(search_books))
        .route("/books/title/:title", get(find_book_by_title))
        .route("/members", post(add_member).get(list_members))
        .route("/members/search", get(search_members))
        .route("/members/:member_id", get(find_member_by_id))
        .route("/loans", get(list_loans))
        .route("/loans/checkout", post(checkout_book))
        .route("/loans/return", post(return_book))
        .with_state(state)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

// Without a query term every book is listed.
pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = match params.q {
        Some(term) => {
            let req = SearchBooksCommandRequest { term };
            let res = SearchBooksCommand::new(state.service.clone()).execute(req).await?;
            ListBooksCommandResponse::new(res.books)
        }
        None => ListBooksCommand::new(state.service.clone()).execute(()).await?,
    };
    Ok(Json(res))
}

pub(crate) async fn find_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>) -> Result<Json<FindBookCommandResponse>, ServerError> {
    let req = FindBookCommandRequest { title };
    let res = FindBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_member(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddMemberCommandResponse>, ServerError> {
    let req: AddMemberCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddMemberCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_members(
    State(state): State<AppState>) -> Result<Json<ListMembersCommandResponse>, ServerError> {
    let res = ListMembersCommand::new(state.service.clone()).execute(()).await?;
    Ok(Json(res))
}

pub(crate) async fn search_members(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>) -> Result<Json<SearchMembersCommandResponse>, ServerError> {
    let req = SearchMembersCommandRequest { term: params.q.unwrap_or_default() };
    let res = SearchMembersCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_member_by_id(
    State(state): State<AppState>,
    Path(member_id): Path<String>) -> Result<Json<FindMemberCommandResponse>, ServerError> {
    let req = FindMemberCommandRequest { member_id };
    let res = FindMemberCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let req: CheckoutBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = CheckoutBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnBookCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_loans(
    State(state): State<AppState>,
    Query(req): Query<ListLoansCommandRequest>) -> Result<Json<ListLoansCommandResponse>, ServerError> {
    let res = ListLoansCommand::new(state.service.clone()).execute(req).await?;
    Ok(Json(res))
}
