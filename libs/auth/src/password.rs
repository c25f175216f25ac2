use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashParseError, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::errors::AuthError;

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// # Errors
/// Returns `AuthError::Hash` if hashing fails.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC-format hash.
///
/// A mismatch is an `Ok(false)`, not an error; only a malformed stored
/// hash or an internal failure returns `Err`.
///
/// # Errors
/// Returns `AuthError::Hash` if the stored hash cannot be parsed.
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashParseError::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
