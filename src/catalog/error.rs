//! Error types for catalog operations.

use std::fmt;

use thiserror::Error;

use crate::book::ValidationError;
use crate::store::StoreError;

/// The catalog operation that produced a result, used to phrase messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
}

impl Operation {
    /// Message sent to the client when the operation succeeds, if it has one.
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::Create => Some("Buku berhasil ditambahkan"),
            Operation::Update => Some("Buku berhasil diperbarui"),
            Operation::Delete => Some("Buku berhasil dihapus"),
            Operation::Get => None,
        }
    }

    /// Leading phrase of a failure message.
    pub fn failure_phrase(self) -> &'static str {
        match self {
            Operation::Create => "Gagal menambahkan buku",
            Operation::Get => "Buku tidak ditemukan",
            Operation::Update => "Gagal memperbarui buku",
            Operation::Delete => "Buku gagal dihapus",
        }
    }

    fn not_found_message(self) -> &'static str {
        match self {
            Operation::Update => "Gagal memperbarui buku. Id tidak ditemukan",
            Operation::Delete => "Buku gagal dihapus. Id tidak ditemukan",
            Operation::Create | Operation::Get => "Buku tidak ditemukan",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Error type for catalog operations.
///
/// The display text is the client-facing message.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload broke a validation rule. Nothing was written.
    #[error("{}. {reason}", .operation.failure_phrase())]
    Validation {
        operation: Operation,
        reason: ValidationError,
    },
    /// No book has the requested id.
    #[error("{}", .operation.not_found_message())]
    NotFound { operation: Operation, id: String },
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation { .. } => 400,
            CatalogError::NotFound { .. } => 404,
            CatalogError::Store(_) => 500,
        }
    }
}
