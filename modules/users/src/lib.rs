//! Users module: account CRUD, password login with JWT issuance, and
//! the shift-scheduling rule attached to the user resource.

pub mod api;
pub mod domain;
pub mod infra;
