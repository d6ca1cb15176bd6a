use serde::{Deserialize, Serialize};

/// Listing projection of a [`Book`](super::Book).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}
