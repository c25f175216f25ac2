use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::Claims;
use crate::errors::AuthError;

/// Default token lifetime: 6 hours.
pub const DEFAULT_TTL_SECONDS: i64 = 6 * 60 * 60;

/// Issues and verifies HS256 bearer tokens.
///
/// Held behind an `Arc` and injected explicitly wherever tokens are
/// issued (login) or verified (the [`crate::CallerIdentity`]
/// extractor).
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    /// Issue a signed token for the given user id.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidToken` if signing fails.
    pub fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// Returns `AuthError::InvalidToken` for malformed, tampered or
    /// expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_returns_subject() {
        let tokens = TokenService::new("test-signature", DEFAULT_TTL_SECONDS);
        let token = tokens.issue(17).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, 17);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verify_rejects_token_signed_with_other_secret() {
        let issuer = TokenService::new("secret-a", DEFAULT_TTL_SECONDS);
        let verifier = TokenService::new("secret-b", DEFAULT_TTL_SECONDS);
        let token = issuer.issue(1).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        let tokens = TokenService::new("test-signature", DEFAULT_TTL_SECONDS);
        assert!(tokens.verify("not-a-jwt").is_err());
    }
}
