use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors surfaced by repository operations. All variants are
/// caller-recoverable; none are process-fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller supplied invalid input: empty update payload, unrecognized
    /// filter key(s), min > max range violation, or a missing foreign key
    /// precondition. 400-equivalent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Target row does not exist. 404-equivalent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create collided with an existing row. 409-equivalent.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other store failure.
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Map a store-level failure onto the typed error kinds.
    ///
    /// The existence pre-checks and their mutating statements are not
    /// wrapped in a transaction, so a constraint violation can still race
    /// past a pre-check; the store constraint is the backstop. Unique
    /// violations become [`StoreError::Conflict`], foreign key violations
    /// become [`StoreError::Validation`].
    pub fn from_database(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return StoreError::Conflict(db_err.message().to_string())
                }
                ErrorKind::ForeignKeyViolation => {
                    return StoreError::Validation(db_err.message().to_string())
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }

    /// True for errors a route layer would answer with 400/404/409.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StoreError::Validation(_) | StoreError::NotFound(_) | StoreError::Conflict(_)
        )
    }
}
