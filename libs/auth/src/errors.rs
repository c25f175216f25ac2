use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid or expired token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("auth misconfiguration: {0}")]
    Internal(String),
}

// `password_hash::Error` does not implement `std::error::Error` on all
// feature sets, so the conversion is explicit rather than `#[from]`.
impl From<argon2::password_hash::Error> for AuthError {
    fn from(e: argon2::password_hash::Error) -> Self {
        Self::Hash(e)
    }
}
