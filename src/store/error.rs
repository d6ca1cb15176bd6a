use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("book store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
