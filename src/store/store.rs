//! BookStore - ordered storage for books.

use crate::book::Book;

use super::StoreError;

/// Ordered storage for books.
///
/// Implementations keep books in insertion order and hand out clones;
/// the store remains the sole owner of the records it holds.
pub trait BookStore: Send + Sync {
    /// Append a book to the end of the collection.
    fn insert(&self, book: Book) -> Result<(), StoreError>;

    /// Books matching `predicate`, in insertion order.
    fn find<F>(&self, predicate: F) -> Result<Vec<Book>, StoreError>
    where
        F: Fn(&Book) -> bool;

    /// Get a book by id.
    fn get(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Mutate a book in place. The lookup and the write happen under one
    /// lock. Returns the updated book, or `None` if no book has `id`.
    fn update<F>(&self, id: &str, mutate: F) -> Result<Option<Book>, StoreError>
    where
        F: FnOnce(&mut Book);

    /// Remove a book by id, returning it if it existed.
    fn remove(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Number of stored books.
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
