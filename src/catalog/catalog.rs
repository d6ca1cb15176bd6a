//! Catalog - the five book operations over an owned store.

use tracing::{debug, info, warn};

use crate::book::{generate_id, timestamp, Book, BookFilter, BookInput, BookSummary};
use crate::store::BookStore;

use super::error::{CatalogError, Operation};

/// The book catalog.
///
/// Generic over `S`, the store implementation. The catalog owns its store;
/// share the catalog itself (e.g. behind an `Arc`) between request handlers.
#[derive(Debug, Default)]
pub struct Catalog<S> {
    store: S,
}

impl<S: BookStore> Catalog<S> {
    /// Create a catalog over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate `input` and append a new book. Returns the generated id.
    pub fn create(&self, input: BookInput) -> Result<String, CatalogError> {
        validate(Operation::Create, &input)?;

        let book = Book::new(generate_id(), input, timestamp());
        let id = book.id.clone();
        self.store.insert(book)?;

        info!(book_id = %id, "book created");
        Ok(id)
    }

    /// Project every book matching `filter`, in insertion order.
    pub fn list(&self, filter: &BookFilter) -> Result<Vec<BookSummary>, CatalogError> {
        let books = self.store.find(|book| filter.matches(book))?;
        debug!(?filter, matched = books.len(), "books listed");
        Ok(books.iter().map(Book::summary).collect())
    }

    /// Get the full record for `id`.
    pub fn get(&self, id: &str) -> Result<Book, CatalogError> {
        self.store
            .get(id)?
            .ok_or_else(|| not_found(Operation::Get, id))
    }

    /// Replace every client-owned field of book `id` with `input`.
    ///
    /// The payload is validated before the id is looked up, so an invalid
    /// payload is reported as a validation error even for an unknown id.
    pub fn update(&self, id: &str, input: BookInput) -> Result<Book, CatalogError> {
        validate(Operation::Update, &input)?;

        let now = timestamp();
        let book = self
            .store
            .update(id, move |book| book.apply(input, now))?
            .ok_or_else(|| not_found(Operation::Update, id))?;

        info!(book_id = %id, "book updated");
        Ok(book)
    }

    /// Remove book `id`, returning the removed record.
    pub fn delete(&self, id: &str) -> Result<Book, CatalogError> {
        let book = self
            .store
            .remove(id)?
            .ok_or_else(|| not_found(Operation::Delete, id))?;

        info!(book_id = %id, "book deleted");
        Ok(book)
    }

    /// Number of books currently held.
    pub fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.store.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.store.is_empty()?)
    }
}

fn validate(operation: Operation, input: &BookInput) -> Result<(), CatalogError> {
    input.validate().map_err(|reason| {
        warn!(%operation, %reason, "book rejected");
        CatalogError::Validation { operation, reason }
    })
}

fn not_found(operation: Operation, id: &str) -> CatalogError {
    debug!(%operation, book_id = %id, "book not found");
    CatalogError::NotFound {
        operation,
        id: id.to_string(),
    }
}
