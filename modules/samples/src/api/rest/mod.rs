pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

use http_problem::Problem;

/// Handler result: success payload or an RFC 9457 problem.
pub type ApiResult<T> = Result<T, Problem>;
