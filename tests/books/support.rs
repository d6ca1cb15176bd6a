//! Shared fixtures for catalog tests.

use bookshelf::{BookInput, Catalog, InMemoryBookStore};

pub fn catalog() -> Catalog<InMemoryBookStore> {
    Catalog::new(InMemoryBookStore::new())
}

/// A fully populated payload.
pub fn book(name: &str, publisher: &str, page_count: u32, read_page: u32) -> BookInput {
    BookInput {
        name: Some(name.to_string()),
        year: Some(2008),
        author: Some("Andrea Hirata".to_string()),
        summary: Some("Ten children on Belitung".to_string()),
        publisher: Some(publisher.to_string()),
        page_count,
        read_page,
        reading: read_page > 0 && read_page < page_count,
    }
}
