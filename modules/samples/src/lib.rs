//! Samples module: a plain CRUD resource with no business rules.

pub mod api;
pub mod domain;
pub mod infra;
