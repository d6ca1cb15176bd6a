//! Book records and the values that describe, validate and select them.
//!
//! - [`Book`] is the stored record. `finished` is derived, never supplied.
//! - [`BookInput`] is the create/update payload, checked by [`BookInput::validate`].
//! - [`BookFilter`] narrows a listing; every supplied criterion must match.
//!   [`BookQuery`] is its raw query-string form.
//! - [`BookSummary`] is the `{id, name, publisher}` projection used in listings.

mod book;
mod filter;
mod id;
mod input;
mod summary;

pub use book::{timestamp, Book};
pub use filter::{BookFilter, BookQuery, Flag, NumberFilter};
pub use id::{generate_id, ID_LEN};
pub use input::{BookInput, ValidationError};
pub use summary::BookSummary;
