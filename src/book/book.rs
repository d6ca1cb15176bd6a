use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::input::BookInput;
use super::summary::BookSummary;

/// A book held by the catalog.
///
/// Serialized with the camelCase field names clients see on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<i64>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

impl Book {
    /// Build a fresh record from an already validated input.
    ///
    /// `inserted_at` and `updated_at` both take `now`.
    pub(crate) fn new(id: String, input: BookInput, now: String) -> Self {
        let mut book = Book {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now.clone(),
            updated_at: now.clone(),
        };
        book.apply(input, now);
        book
    }

    /// Overwrite every client-owned field with `input` and refresh `updated_at`.
    ///
    /// `id` and `inserted_at` are left alone. `updated_at` never moves
    /// behind `inserted_at`, even if the wall clock steps backwards.
    pub(crate) fn apply(&mut self, input: BookInput, now: String) {
        self.name = input.name.unwrap_or_default();
        self.year = input.year;
        self.author = input.author;
        self.summary = input.summary;
        self.publisher = input.publisher;
        self.page_count = input.page_count;
        self.read_page = input.read_page;
        self.reading = input.reading;
        self.finished = self.page_count == self.read_page;
        self.updated_at = if now < self.inserted_at {
            self.inserted_at.clone()
        } else {
            now
        };
    }

    /// The `{id, name, publisher}` view used by listings.
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Current UTC time as an ISO-8601 string with millisecond precision,
/// e.g. `2024-05-01T08:30:00.000Z`.
///
/// Fixed width, so two timestamps compare correctly as strings.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
