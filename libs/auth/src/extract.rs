//! Axum extractor resolving the caller identity from a bearer token.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use http_problem::{Problem, internal_error, unauthorized};

use crate::token::TokenService;

/// Wire message expected by existing clients.
const INVALID_TOKEN_DETAIL: &str =
    "Invalid Token or No token provided in authorization header";

/// The authenticated user id attached to a request.
///
/// Requires an `Extension(Arc<TokenService>)` layer on the router;
/// rejects with a 401 Problem when the `Authorization: Bearer` header
/// is missing or fails verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let tokens = parts
            .extensions
            .get::<Arc<TokenService>>()
            .cloned()
            .ok_or_else(|| {
                internal_error("TokenService not found - auth layer not configured")
            })?;

        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| unauthorized(INVALID_TOKEN_DETAIL))?;

        match tokens.verify(bearer) {
            Ok(claims) => Ok(Self {
                user_id: claims.sub,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "bearer token verification failed");
                Err(unauthorized(INVALID_TOKEN_DETAIL))
            }
        }
    }
}
