//! InMemoryBookStore - Vec-backed book store living for the process lifetime.

use std::sync::{Arc, RwLock};

use crate::book::Book;

use super::{BookStore, StoreError};

/// In-memory book store backed by a `Vec` under a `RwLock`.
///
/// Clone-friendly via Arc: clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for InMemoryBookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.books.read().map(|books| books.len()).ok();
        f.debug_struct("InMemoryBookStore").field("len", &len).finish()
    }
}

impl BookStore for InMemoryBookStore {
    fn insert(&self, book: Book) -> Result<(), StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;
        books.push(book);
        Ok(())
    }

    fn find<F>(&self, predicate: F) -> Result<Vec<Book>, StoreError>
    where
        F: Fn(&Book) -> bool,
    {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("find"))?;
        Ok(books.iter().filter(|b| predicate(b)).cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<Book>, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    fn update<F>(&self, id: &str, mutate: F) -> Result<Option<Book>, StoreError>
    where
        F: FnOnce(&mut Book),
    {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                mutate(book);
                Ok(Some(book.clone()))
            }
            None => Ok(None),
        }
    }

    fn remove(&self, id: &str) -> Result<Option<Book>, StoreError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        let index = books.iter().position(|b| b.id == id);
        Ok(index.map(|index| books.remove(index)))
    }

    fn len(&self) -> Result<usize, StoreError> {
        let books = self
            .books
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(books.len())
    }
}
