//! Book storage: an ordered collection that remembers insertion order.
//!
//! [`BookStore`] is the seam the catalog is written against;
//! [`InMemoryBookStore`] is the process-lifetime implementation.

mod error;
mod in_memory;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryBookStore;
pub use store::BookStore;
