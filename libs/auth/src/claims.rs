use serde::{Deserialize, Serialize};

/// JWT claims carried by a Shiftdesk bearer token.
///
/// `sub` is the numeric user id; `iat`/`exp` are seconds since the
/// Unix epoch. Expiry checking is delegated to the token validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user id.
    pub sub: i64,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiration, Unix seconds.
    pub exp: i64,
}
