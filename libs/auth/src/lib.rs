//! Authentication primitives: JWT issuance/verification, password
//! hashing, and the axum extractor that turns a verified bearer token
//! into a caller identity.

pub mod claims;
pub mod errors;
pub mod extract;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use errors::AuthError;
pub use extract::CallerIdentity;
pub use token::{DEFAULT_TTL_SECONDS, TokenService};
