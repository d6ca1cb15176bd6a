//! bookshelf - an in-memory book catalog with an HTTP front end.
//!
//! - [`Catalog`] runs the create / list / get / update / delete operations.
//! - [`InMemoryBookStore`] keeps the books, in insertion order, for the
//!   lifetime of the process.
//! - [`http`] (feature `http`) exposes the catalog under `/books`.

pub mod book;
pub mod catalog;
pub mod store;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "server")]
pub mod config;

pub use book::{
    Book, BookFilter, BookInput, BookQuery, BookSummary, Flag, NumberFilter, ValidationError,
};
pub use catalog::{Catalog, CatalogError, Operation};
pub use store::{BookStore, InMemoryBookStore, StoreError};
