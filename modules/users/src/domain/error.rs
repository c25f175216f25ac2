use thiserror::Error;

/// Domain-specific errors for the users module.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {id}")]
    NotFound { id: i64 },

    #[error("User does not exist.")]
    UserDoesNotExist,

    #[error("User with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Incorrect Email or Password combination.")]
    InvalidCredentials,

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    /// A shift is already recorded for the current calendar day.
    #[error("{reason}")]
    ShiftBlocked { reason: String },

    /// The guarded shift write matched no rows: the record changed
    /// between the read and the write.
    #[error("Shift record was modified concurrently")]
    Conflict,

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn shift_blocked(reason: impl Into<String>) -> Self {
        Self::ShiftBlocked {
            reason: reason.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
