//! Route handlers. Each one extracts, calls the catalog, and wraps the result.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::book::{BookFilter, BookInput, BookQuery};
use crate::catalog::{Catalog, Operation};
use crate::store::BookStore;

use super::envelope::{BookDetail, BookList, CreatedBook, Envelope, Health};
use super::error::{ApiError, ApiResult};

type SharedCatalog<S> = State<Arc<Catalog<S>>>;

/// `POST /books`
pub(super) async fn create_book<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<CreatedBook>>)> {
    let Json(input) = payload.map_err(|e| ApiError::malformed_body(Operation::Create, e))?;
    let book_id = catalog.create(input)?;
    let envelope = Envelope::success(CreatedBook { book_id }).with_message(success(Operation::Create));
    Ok((StatusCode::CREATED, Json(envelope)))
}

/// `GET /books`
pub(super) async fn list_books<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Envelope<BookList>>> {
    let filter = BookFilter::from(BookQuery::from_pairs(params));
    let books = catalog.list(&filter)?;
    Ok(Json(Envelope::success(BookList { books })))
}

/// `GET /books/:book_id`
pub(super) async fn get_book<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<Envelope<BookDetail>>> {
    let book = catalog.get(&book_id)?;
    Ok(Json(Envelope::success(BookDetail { book })))
}

/// `PUT /books/:book_id`
pub(super) async fn update_book<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<()>>> {
    let Json(input) = payload.map_err(|e| ApiError::malformed_body(Operation::Update, e))?;
    catalog.update(&book_id, input)?;
    Ok(Json(Envelope::message(success(Operation::Update))))
}

/// `DELETE /books/:book_id`
pub(super) async fn delete_book<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
    Path(book_id): Path<String>,
) -> ApiResult<Json<Envelope<()>>> {
    catalog.delete(&book_id)?;
    Ok(Json(Envelope::message(success(Operation::Delete))))
}

/// `GET /health`
pub(super) async fn health<S: BookStore + 'static>(
    State(catalog): SharedCatalog<S>,
) -> ApiResult<Json<Envelope<Health>>> {
    let books = catalog.len()?;
    Ok(Json(Envelope::success(Health { books })))
}

fn success(operation: Operation) -> &'static str {
    operation.success_message().unwrap_or_default()
}
