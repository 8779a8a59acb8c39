use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Only successful generations are persisted; an empty plan is a caller bug.
    #[error("refusing to store an empty plan")]
    EmptyContent,
}

pub type Result<T> = std::result::Result<T, StoreError>;
