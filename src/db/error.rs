use std::fmt;

use thiserror::Error;

/// Column under a unique constraint, recovered from the SQLite error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Phone,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the store can fail with. Callers match on the kind to decide
/// wording and log severity; none of these is ever allowed to surface as a
/// panic.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before it reached the database.
    #[error("{0}")]
    Validation(String),

    /// A unique constraint on email or phone was violated.
    #[error("a contact with this {0} already exists")]
    Duplicate(UniqueField),

    /// The referenced contact does not exist.
    #[error("no contact found with ID {0}")]
    NotFound(i64),

    /// Any other persistence failure (unreachable file, I/O, SQLite internals).
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(inner, Some(msg)) = &err {
            if inner.code == rusqlite::ErrorCode::ConstraintViolation {
                if msg.contains("contacts.email") {
                    return Self::Duplicate(UniqueField::Email);
                }
                if msg.contains("contacts.phone") {
                    return Self::Duplicate(UniqueField::Phone);
                }
            }
        }
        Self::Storage(err.into())
    }
}
