//! The book catalog: create, list, get, update and delete over a [`BookStore`].
//!
//! ```ignore
//! use bookshelf::{BookInput, BookFilter, Catalog, InMemoryBookStore};
//!
//! let catalog = Catalog::new(InMemoryBookStore::new());
//! let id = catalog.create(BookInput { name: Some("Dune".into()), ..Default::default() })?;
//! let book = catalog.get(&id)?;
//! let all = catalog.list(&BookFilter::default())?;
//! ```
//!
//! [`BookStore`]: crate::store::BookStore

mod catalog;
mod error;

pub use catalog::Catalog;
pub use error::{CatalogError, Operation};
