//! Error types for Love Notes

use thiserror::Error;

/// Main error type for Love Notes operations
#[derive(Error, Debug)]
pub enum NotesError {
    /// Submitted password did not match the expected one.
    ///
    /// This is the only domain error. It is shown inline and the visitor may
    /// retry as often as they like.
    #[error("Password mismatch")]
    PasswordMismatch,

    /// A note deck must contain at least one note
    #[error("Note deck is empty")]
    EmptyDeck,

    /// Note at the given position is empty or whitespace only
    #[error("Note {0} is blank")]
    BlankNote(usize),

    /// Error during key-value storage operations
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using NotesError
pub type NotesResult<T> = Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NotesError::PasswordMismatch.to_string(), "Password mismatch");
        assert_eq!(NotesError::BlankNote(3).to_string(), "Note 3 is blank");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read only");
        let err: NotesError = io_err.into();
        assert!(matches!(err, NotesError::Io(_)));
    }
}
